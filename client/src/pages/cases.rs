//! Case browser with free-text search plus category and status filters.
//! Filtered results are split into active, closed and all tabs.

use leptos::prelude::*;

use crate::components::case_list::CaseList;
use crate::net::api;
use crate::state::cases::{self, CaseFilter, CaseStatus, CaseTab, LegalCase};
use crate::state::session::{Role, SessionContext};

const ALL: &str = "all";

#[component]
pub fn CasesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = Memo::new(move |_| session.session().role.unwrap_or_default());
    let loaded = LocalResource::new(move || api::fetch_cases(role.get()));
    let filter = RwSignal::new(CaseFilter::default());

    let heading = move || match role.get() {
        Role::Client => "My Cases",
        Role::Lawyer => "Caseload",
    };

    view! {
        <div class="cases-page">
            <header class="cases-page__header">
                <h1 class="cases-page__title">{heading}</h1>
                <p class="cases-page__subtitle">"Search and filter your legal matters"</p>
            </header>
            {move || match loaded.get() {
                None => view! { <p class="cases-page__loading">"Loading cases..."</p> }.into_any(),
                Some(all) => {
                    let show_client = role.get_untracked() == Role::Lawyer;
                    view! { <CaseBrowser cases=all filter=filter show_client=show_client/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CaseBrowser(cases: Vec<LegalCase>, filter: RwSignal<CaseFilter>, show_client: bool) -> impl IntoView {
    let category_options = cases::categories(&cases);
    let visible = Memo::new(move |_| filter.with(|f| f.apply(&cases)));
    let tab = RwSignal::new(CaseTab::default());
    let shown = Memo::new(move |_| visible.with(|cases| tab.get().select(cases)));

    view! {
        <div class="cases-page__filters">
            <input
                class="cases-page__search"
                type="search"
                placeholder="Search cases..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                }
            />
            <select
                class="cases-page__select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.category = (value != ALL).then_some(value));
                }
            >
                <option value=ALL>"All categories"</option>
                {category_options
                    .into_iter()
                    .map(|category| {
                        let label = category.clone();
                        view! { <option value=category>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="cases-page__select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.status = CaseStatus::parse(&value));
                }
            >
                <option value=ALL>"All statuses"</option>
                {CaseStatus::ALL
                    .into_iter()
                    .map(|status| view! { <option value={status.as_str()}>{status.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
        <p class="cases-page__count">{move || format!("{} cases", visible.with(Vec::len))}</p>
        <div class="tabs" role="tablist">
            {CaseTab::ALL
                .into_iter()
                .map(|value| {
                    view! {
                        <button
                            type="button"
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == value
                            role="tab"
                            on:click=move |_| tab.set(value)
                        >
                            {value.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        {move || {
            view! { <CaseList cases=shown.get() show_client=show_client empty_text="No cases match your filters"/> }
        }}
    }
}
