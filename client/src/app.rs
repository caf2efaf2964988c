//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the two long-lived client objects: the session store and the
//! identity provider. The store subscribes to the provider once on mount and
//! the subscription is released in `on_cleanup`, so the provider never calls
//! into a torn-down shell.
//!
//! The route table itself is always rendered, so the host can enumerate it
//! for SSR. Every page sits under a `SessionGate` parent route that shows
//! the loading screen until the first auth event, which keeps a protected
//! page from flashing a redirect while the session is still unknown.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guarded::Guarded;
use crate::components::navbar::Navbar;
use crate::components::session_gate::SessionGate;
use crate::net::identity::{HttpIdentityProvider, IdentityProvider, Principal};
use crate::pages::{
    cases::CasesPage, dashboard::DashboardPage, home::HomePage, lawyer_dashboard::LawyerDashboard,
    legal_ai::LegalAiPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::session::SessionContext;
use crate::util::guard::{CASES_PATH, LANDING_PATH, LAWYER_PATH, LEGAL_AI_PATH, access_for};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    let provider = HttpIdentityProvider::new();
    provide_context(session);
    provide_context(provider.clone());

    let subscription = provider.subscribe(Arc::new(move |principal: Option<Principal>| {
        session.on_auth_event(principal.as_ref());
    }));
    on_cleanup(move || drop(subscription));

    view! {
        <Stylesheet id="leptos" href="/pkg/legalcloud.css"/>
        <Title text="LegalCloud Advisor"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=NotFoundPage>
                        <ParentRoute path=StaticSegment("") view=SessionGate>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route
                                path=StaticSegment("dashboard")
                                view=|| view! { <Guarded access=access_for(LANDING_PATH)><DashboardPage/></Guarded> }
                            />
                            <Route
                                path=StaticSegment("cases")
                                view=|| view! { <Guarded access=access_for(CASES_PATH)><CasesPage/></Guarded> }
                            />
                            <Route
                                path=StaticSegment("legal-ai")
                                view=|| view! { <Guarded access=access_for(LEGAL_AI_PATH)><LegalAiPage/></Guarded> }
                            />
                            <Route
                                path=StaticSegment("lawyer")
                                view=|| view! { <Guarded access=access_for(LAWYER_PATH)><LawyerDashboard/></Guarded> }
                            />
                        </ParentRoute>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
