//! Top navigation bar with session-aware actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::identity::HttpIdentityProvider;
use crate::state::session::{Role, SessionContext, SessionPhase};
use crate::util::guard::{CASES_PATH, HOME_PATH, LANDING_PATH, LAWYER_PATH, LEGAL_AI_PATH, LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let provider = expect_context::<HttpIdentityProvider>();

    let phase = move || session.session().phase();
    let is_lawyer = move || phase() == SessionPhase::Authenticated(Role::Lawyer);
    let signed_in = move || matches!(phase(), SessionPhase::Authenticated(_));
    let display_name = move || session.session().display_name.unwrap_or_default();

    let on_sign_out = move |_| session.sign_out(provider.clone());

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href=HOME_PATH attr:class="navbar__brand">
                    <span class="navbar__brand-name">"LegalCloud"</span>
                    <span class="navbar__brand-suffix">"Advisor"</span>
                </A>

                <div class="navbar__links">
                    <A href=LANDING_PATH attr:class="navbar__link">"Dashboard"</A>
                    <A href=CASES_PATH attr:class="navbar__link">"My Cases"</A>
                    <A href=LEGAL_AI_PATH attr:class="navbar__link">"Legal AI"</A>
                    <Show when=is_lawyer>
                        <A href=LAWYER_PATH attr:class="navbar__link">"Workspace"</A>
                    </Show>
                </div>

                <div class="navbar__actions">
                    <Show
                        when=signed_in
                        fallback=move || {
                            view! {
                                <A href=LOGIN_PATH attr:class="btn btn--ghost">"Sign In"</A>
                                <A href=REGISTER_PATH attr:class="btn btn--primary">"Register"</A>
                            }
                        }
                    >
                        <span class="navbar__user">{display_name}</span>
                        <button class="btn btn--ghost" on:click=on_sign_out.clone()>
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
