use leptos::prelude::*;

/// Summary tile with a headline figure and an optional link.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] link: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3 class="stat-card__title">{title}</h3>
            <p class="stat-card__value">{move || value.get()}</p>
            {link.map(|(href, label)| view! { <a class="stat-card__link" href=href>{label}</a> })}
        </div>
    }
}
