use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::guard::{LOGIN_PATH, REGISTER_PATH};

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1 class="home-page__title">"LegalCloud Advisor System"</h1>
                <p class="home-page__tagline">
                    "A simple and efficient way to get legal assistance, manage cases, and connect with legal professionals."
                </p>
                <div class="home-page__actions">
                    <A href=LOGIN_PATH attr:class="btn btn--primary btn--large">"Login"</A>
                    <A href=REGISTER_PATH attr:class="btn btn--outline btn--large">"Sign Up"</A>
                </div>
            </div>
        </div>
    }
}
