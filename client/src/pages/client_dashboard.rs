//! Dashboard for clients: own cases, appointments and recent legal queries.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::appointment_list::AppointmentList;
use crate::components::case_list::CaseList;
use crate::components::stat_card::StatCard;
use crate::net::api::{self, ClientOverview};
use crate::state::cases;
use crate::state::legal_ai::LegalQuery;
use crate::state::session::SessionContext;
use crate::util::format::{format_date, now};
use crate::util::guard::{CASES_PATH, LEGAL_AI_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Cases,
    Appointments,
    Queries,
}

#[component]
pub fn ClientDashboard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let today = now().date();
    let overview = LocalResource::new(move || api::fetch_client_overview(today));
    let tab = RwSignal::new(Tab::Cases);

    let greeting = move || {
        let name = session.session().display_name.unwrap_or_else(|| "there".to_owned());
        format!("Welcome back, {name}")
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"Client Dashboard"</h1>
                    <p class="dashboard-page__subtitle">{greeting}</p>
                </div>
                <A href=LEGAL_AI_PATH attr:class="btn btn--primary">"Ask a Legal Question"</A>
            </header>
            {move || match overview.get() {
                None => view! { <p class="dashboard-page__loading">"Loading your dashboard..."</p> }.into_any(),
                Some(data) => view! { <ClientOverviewView data=data tab=tab/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ClientOverviewView(data: ClientOverview, tab: RwSignal<Tab>) -> impl IntoView {
    let active = cases::active_count(&data.cases);
    let appointment_count = data.appointments.len();
    let query_count = data.queries.len();
    let ClientOverview { cases, appointments, queries } = data;

    view! {
        <div class="dashboard-page__stats">
            <StatCard
                title="Active Cases"
                value=Signal::derive(move || format!("{active} cases in progress"))
                link=(CASES_PATH, "View all cases")
            />
            <StatCard
                title="Appointments"
                value=Signal::derive(move || format!("{appointment_count} scheduled"))
            />
            <StatCard
                title="Legal Queries"
                value=Signal::derive(move || format!("{query_count} recent inquiries"))
                link=(LEGAL_AI_PATH, "Ask a new question")
            />
        </div>
        <nav class="tabs">
            <TabButton tab=tab value=Tab::Cases label="My Cases"/>
            <TabButton tab=tab value=Tab::Appointments label="Appointments"/>
            <TabButton tab=tab value=Tab::Queries label="Legal Queries"/>
        </nav>
        <section class="tabs__panel">
            {move || match tab.get() {
                Tab::Cases => view! {
                    <h2 class="tabs__heading">"Active Legal Cases"</h2>
                    <CaseList cases=cases.clone() empty_text="You don't have any active cases"/>
                }
                    .into_any(),
                Tab::Appointments => view! {
                    <h2 class="tabs__heading">"Scheduled Appointments"</h2>
                    <AppointmentList appointments=appointments.clone() empty_text="You don't have any upcoming appointments"/>
                }
                    .into_any(),
                Tab::Queries => view! {
                    <h2 class="tabs__heading">"Recent Legal Queries"</h2>
                    <QueryList queries=queries.clone()/>
                }
                    .into_any(),
            }}
        </section>
    }
}

#[component]
fn TabButton(tab: RwSignal<Tab>, value: Tab, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="tabs__tab"
            class:tabs__tab--active=move || tab.get() == value
            on:click=move |_| tab.set(value)
        >
            {label}
        </button>
    }
}

#[component]
fn QueryList(queries: Vec<LegalQuery>) -> impl IntoView {
    if queries.is_empty() {
        return view! { <p class="empty-state">"You haven't asked any legal questions yet"</p> }.into_any();
    }

    view! {
        <ul class="query-list">
            {queries
                .into_iter()
                .map(|query| {
                    view! {
                        <li class="query-list__item">
                            <p class="query-list__question">{query.question}</p>
                            <div class="query-list__meta">
                                <span>{format!("Asked on {}", format_date(query.asked_at))}</span>
                                <span class={query.status.badge_class()}>{query.status.as_str()}</span>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
