//! Blocking screen shown until the identity provider first reports.

use leptos::prelude::*;

use crate::state::session::SessionContext;

/// Full-page loading state. Greets a returning user from the cached flags.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = RwSignal::new(None::<String>);

    // Flags only exist in the browser; read them after hydration so the
    // server and client render the same markup first.
    Effect::new(move || {
        let cached = session.cached_flags();
        if cached.is_authenticated {
            greeting.set(cached.user_name.map(|name| format!("Welcome back, {name}")));
        }
    });

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <Show when=move || greeting.get().is_some()>
                <p class="loading-screen__greeting">{move || greeting.get().unwrap_or_default()}</p>
            </Show>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
