//! Sign-in page backed by the identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::identity::HttpIdentityProvider;
use crate::state::session::{DEMO_LAWYER_EMAIL, SessionContext};
use crate::util::guard::REGISTER_PATH;

pub(crate) const MISSING_INPUT: &str = "Enter your email and password.";
pub(crate) const SIGN_IN_FAILED: &str = "Invalid email or password. Please try again.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let provider = expect_context::<HttpIdentityProvider>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::flags::{remember_role, restore_role};
            use crate::state::session::role_hint_for_email;

            let flags = session.flags();
            let provider = provider.clone();
            let navigate = navigate.clone();
            let previous_role = remember_role(&flags, role_hint_for_email(&email_value));
            leptos::task::spawn_local(async move {
                match provider.sign_in(&email_value, &password_value).await {
                    Ok(_) => {
                        busy.set(false);
                        navigate(crate::util::guard::LANDING_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign-in failed: {e}");
                        restore_role(&flags, previous_role);
                        error.set(SIGN_IN_FAILED.to_owned());
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, &provider);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in to your account"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and password to access your legal dashboard"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="name@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                    <p class="auth-form__hint">
                        {format!("For demo: use {DEMO_LAWYER_EMAIL} / lawyer123 for lawyer access")}
                    </p>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=REGISTER_PATH>"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
