//! Case rows shared by the dashboards and the cases page.

use leptos::prelude::*;

use crate::state::cases::{CaseStatus, LegalCase};
use crate::util::format::format_date;

/// Vertical list of cases with status badges.
///
/// When `on_status_change` is set each row gets a status selector.
#[component]
pub fn CaseList(
    cases: Vec<LegalCase>,
    #[prop(optional)] show_client: bool,
    #[prop(optional)] on_status_change: Option<Callback<(String, CaseStatus)>>,
    #[prop(default = "No cases found")] empty_text: &'static str,
) -> impl IntoView {
    if cases.is_empty() {
        return view! { <p class="empty-state">{empty_text}</p> }.into_any();
    }

    view! {
        <ul class="case-list">
            {cases
                .into_iter()
                .map(|case| {
                    let case_id = case.id.clone();
                    let status = case.status;
                    view! {
                        <li class="case-list__item">
                            <div class="case-list__header">
                                <div>
                                    <span class="case-list__title">{case.title}</span>
                                    <p class="case-list__category">
                                        {case.category}
                                        {show_client.then(|| format!(" · {}", case.client_name))}
                                    </p>
                                </div>
                                <span class={status.badge_class()}>{status.label()}</span>
                            </div>
                            <p class="case-list__description">{case.description}</p>
                            <div class="case-list__meta">
                                {format!("Updated {}", format_date(case.updated_at))}
                            </div>
                            {on_status_change
                                .map(|on_change| {
                                    view! {
                                        <select
                                            class="case-list__status"
                                            on:change=move |ev| {
                                                if let Some(next) = CaseStatus::parse(&event_target_value(&ev)) {
                                                    on_change.run((case_id.clone(), next));
                                                }
                                            }
                                        >
                                            {CaseStatus::ALL
                                                .into_iter()
                                                .map(|option| {
                                                    view! {
                                                        <option value={option.as_str()} selected={option == status}>
                                                            {option.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    }
                                })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
