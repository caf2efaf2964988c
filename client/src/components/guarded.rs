//! Wrapping route node that enforces the route guard.

#[cfg(test)]
#[path = "guarded_test.rs"]
mod guarded_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading_screen::LoadingScreen;
use crate::state::session::SessionContext;
use crate::util::guard::{Access, LOGIN_PATH, RouteDecision, decide_access};

/// Guard redirects replace the protected entry so Back does not bounce
/// between it and the login page.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Renders `children` only when the current session satisfies `access`.
///
/// Unauthenticated visitors go to `redirect_path`; authenticated users with
/// the wrong role go to the landing page.
#[component]
pub fn Guarded(
    access: Access,
    #[prop(default = LOGIN_PATH)] redirect_path: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || match decide_access(&session.session(), access, redirect_path) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path options=redirect_options()/> }.into_any(),
        RouteDecision::Pending => view! { <LoadingScreen/> }.into_any(),
    }
}
