//! Authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits behind the route guard, so the session is always authenticated
//! here. The role decides which dashboard renders; a role change after
//! sign-in (e.g. a fresh auth event) swaps the view in place.

use leptos::prelude::*;

use crate::pages::client_dashboard::ClientDashboard;
use crate::pages::lawyer_dashboard::LawyerDashboard;
use crate::state::session::{Role, SessionContext};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = Memo::new(move |_| session.session().role);

    move || match role.get() {
        Some(Role::Lawyer) => view! { <LawyerDashboard/> }.into_any(),
        _ => view! { <ClientDashboard/> }.into_any(),
    }
}
