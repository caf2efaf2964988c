use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::guard::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__message">"The page you are looking for doesn't exist or has been moved."</p>
            <A href=HOME_PATH attr:class="btn btn--primary">"Return to Homepage"</A>
        </div>
    }
}
