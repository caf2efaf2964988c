//! Appointment rows with an optional cancel action.

use leptos::prelude::*;

use crate::state::appointments::{Appointment, AppointmentStatus};
use crate::util::format::format_date_time;

#[component]
pub fn AppointmentList(
    appointments: Vec<Appointment>,
    #[prop(optional)] on_cancel: Option<Callback<String>>,
    #[prop(default = "No appointments scheduled")] empty_text: &'static str,
) -> impl IntoView {
    if appointments.is_empty() {
        return view! { <p class="empty-state">{empty_text}</p> }.into_any();
    }

    view! {
        <ul class="appointment-list">
            {appointments
                .into_iter()
                .map(|appointment| {
                    let id = appointment.id.clone();
                    let status = appointment.status;
                    let counterpart = appointment
                        .client_name
                        .map_or_else(|| format!("with {}", appointment.lawyer_name), |c| format!("Client: {c}"));
                    view! {
                        <li class="appointment-list__item">
                            <div>
                                <p class="appointment-list__title">{appointment.title}</p>
                                <p class="appointment-list__who">{counterpart}</p>
                                <p class="appointment-list__when">{format_date_time(appointment.at)}</p>
                            </div>
                            <div class="appointment-list__actions">
                                <span class={status.badge_class()}>{status.as_str()}</span>
                                {on_cancel
                                    .filter(|_| status != AppointmentStatus::Cancelled)
                                    .map(|cancel| {
                                        view! {
                                            <button class="btn btn--small" on:click=move |_| cancel.run(id.clone())>
                                                "Cancel"
                                            </button>
                                        }
                                    })}
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
