//! Lawyer workspace: caseload, appointments and client directory.
//!
//! DESIGN
//! ======
//! The fixture overview is loaded once per mount. After it resolves, cases
//! and appointments move into page-local signals so status changes and
//! cancellations update the statistics without another load. Nothing is
//! written back; a reload restores the fixtures.

use leptos::prelude::*;
use time::Date;

use crate::components::appointment_list::AppointmentList;
use crate::components::case_list::CaseList;
use crate::components::stat_card::StatCard;
use crate::net::api::{self, LawyerOverview};
use crate::state::appointments::{self, Appointment};
use crate::state::cases::{self, CaseStatus};
use crate::state::clients::ClientRecord;
use crate::util::format::{format_date, format_iso_date, format_time, now, parse_iso_date};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Cases,
    Appointments,
    Clients,
}

const NEW_CASE_NOTICE: &str = "New case creation is coming soon.";

#[component]
pub fn LawyerDashboard() -> impl IntoView {
    let today = now().date();
    let overview = LocalResource::new(move || api::fetch_lawyer_overview(today));

    view! {
        <div class="dashboard-page">
            {move || match overview.get() {
                None => view! { <p class="dashboard-page__loading">"Loading your workspace..."</p> }.into_any(),
                Some(data) => view! { <LawyerWorkspace data=data today=today/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LawyerWorkspace(data: LawyerOverview, today: Date) -> impl IntoView {
    let LawyerOverview { cases: case_data, appointments: appointment_data, clients } = data;
    let case_list = RwSignal::new(case_data);
    let appointment_list = RwSignal::new(appointment_data);
    let client_count = clients.len();
    let tab = RwSignal::new(Tab::Cases);
    let calendar_open = RwSignal::new(false);
    let notice = RwSignal::new(None::<&'static str>);

    let active = Signal::derive(move || case_list.with(|c| cases::active_count(c)).to_string());
    let upcoming = Signal::derive(move || appointment_list.with(|a| appointments::upcoming_count(a, now())).to_string());
    let urgent = Memo::new(move |_| case_list.with(|c| cases::urgent_cases(c)));

    let on_status_change = Callback::new(move |(case_id, status): (String, CaseStatus)| {
        case_list.update(|c| {
            if !cases::set_status(c, &case_id, status, now()) {
                leptos::logging::warn!("status change for unknown case {case_id}");
            }
        });
    });

    let on_cancel = Callback::new(move |appointment_id: String| {
        appointment_list.update(|a| {
            if !appointments::cancel(a, &appointment_id) {
                leptos::logging::warn!("cancel for unknown appointment {appointment_id}");
            }
        });
    });

    view! {
        <header class="dashboard-page__header">
            <div>
                <h1 class="dashboard-page__title">"Lawyer Dashboard"</h1>
                <p class="dashboard-page__subtitle">"Welcome back, Counselor"</p>
            </div>
            <div class="dashboard-page__actions">
                <button class="btn btn--outline" type="button" on:click=move |_| calendar_open.update(|open| *open = !*open)>
                    "View Calendar"
                </button>
                <button class="btn btn--primary" type="button" on:click=move |_| notice.set(Some(NEW_CASE_NOTICE))>
                    "New Case"
                </button>
            </div>
        </header>
        {move || notice.get().map(|text| view! {
            <div class="notice">
                <span>{text}</span>
                <button class="notice__close" type="button" on:click=move |_| notice.set(None)>"×"</button>
            </div>
        })}
        <Show when=move || calendar_open.get()>
            <DayView schedule=appointment_list today=today/>
        </Show>

        <div class="dashboard-page__stats">
            <StatCard title="Active Cases" value=active/>
            <StatCard title="Upcoming Appointments" value=upcoming/>
            <StatCard title="Total Clients" value=Signal::derive(move || client_count.to_string())/>
        </div>

        <section class="urgent-cases">
            <h2 class="urgent-cases__title">"Urgent Cases"</h2>
            {move || view! { <CaseList cases=urgent.get() show_client=true empty_text="No urgent cases"/> }}
        </section>

        <nav class="tabs">
            <TabButton tab=tab value=Tab::Cases label="Case Management"/>
            <TabButton tab=tab value=Tab::Appointments label="Appointments"/>
            <TabButton tab=tab value=Tab::Clients label="Client Directory"/>
        </nav>
        <section class="tabs__panel">
            {move || match tab.get() {
                Tab::Cases => view! {
                    <CaseList cases=case_list.get() show_client=true on_status_change=on_status_change/>
                }
                    .into_any(),
                Tab::Appointments => view! {
                    <AppointmentList appointments=appointment_list.get() on_cancel=on_cancel/>
                }
                    .into_any(),
                Tab::Clients => view! { <ClientDirectory clients=clients.clone()/> }.into_any(),
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

/// Appointments on one selected day.
#[component]
fn DayView(schedule: RwSignal<Vec<Appointment>>, today: Date) -> impl IntoView {
    let selected = RwSignal::new(today);
    let day_list = Memo::new(move |_| schedule.with(|a| appointments::on_date(a, selected.get())));

    view! {
        <section class="day-view">
            <h2 class="day-view__title">"Calendar View"</h2>
            <input
                class="day-view__picker"
                type="date"
                prop:value=move || format_iso_date(selected.get())
                on:change=move |ev| {
                    if let Some(day) = parse_iso_date(&event_target_value(&ev)) {
                        selected.set(day);
                    }
                }
            />
            <h3 class="day-view__heading">{move || format!("Appointments for {}", format_date(selected.get()))}</h3>
            {move || {
                let list = day_list.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No appointments scheduled for this date"</p> }.into_any();
                }
                view! {
                    <ul class="day-view__list">
                        {list
                            .into_iter()
                            .map(|appointment| {
                                view! {
                                    <li class="day-view__item">
                                        <span class="day-view__time">{format_time(appointment.at)}</span>
                                        <span>{appointment.title}</span>
                                        <span class="day-view__client">{appointment.client_name.unwrap_or_default()}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn ClientDirectory(clients: Vec<ClientRecord>) -> impl IntoView {
    if clients.is_empty() {
        return view! { <p class="empty-state">"No clients yet"</p> }.into_any();
    }

    view! {
        <table class="client-directory">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Client Since"</th>
                    <th>"Cases"</th>
                </tr>
            </thead>
            <tbody>
                {clients
                    .into_iter()
                    .map(|client| {
                        view! {
                            <tr>
                                <td>{client.name}</td>
                                <td>{client.email}</td>
                                <td>{client.phone}</td>
                                <td>{format_date(client.joined_at)}</td>
                                <td>{client.cases_count}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
        .into_any()
}

