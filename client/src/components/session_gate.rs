//! Parent route that holds every page back until the session is known.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::loading_screen::LoadingScreen;
use crate::state::session::SessionContext;

/// Renders the matched child route once the identity provider has reported,
/// and the loading screen before that.
#[component]
pub fn SessionGate() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    view! {
        <Show when=move || !session.is_loading() fallback=LoadingScreen>
            <Outlet/>
        </Show>
    }
}
