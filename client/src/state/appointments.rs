//! Consultation appointments between clients and lawyers.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Scheduled => "badge badge--blue",
            Self::Confirmed => "badge badge--green",
            Self::Cancelled => "badge badge--red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub lawyer_name: String,
    pub client_name: Option<String>,
    pub at: PrimitiveDateTime,
    pub status: AppointmentStatus,
}

/// Not cancelled and strictly after `now`.
#[must_use]
pub fn is_upcoming(appointment: &Appointment, now: PrimitiveDateTime) -> bool {
    appointment.status != AppointmentStatus::Cancelled && appointment.at > now
}

#[must_use]
pub fn upcoming_count(appointments: &[Appointment], now: PrimitiveDateTime) -> usize {
    appointments.iter().filter(|a| is_upcoming(a, now)).count()
}

/// Appointments falling on `day`, in time order.
#[must_use]
pub fn on_date(appointments: &[Appointment], day: Date) -> Vec<Appointment> {
    let mut out: Vec<Appointment> = appointments.iter().filter(|a| a.at.date() == day).cloned().collect();
    out.sort_by_key(|a| a.at);
    out
}

/// Mark an appointment cancelled. Returns `false` if the id is unknown.
pub fn cancel(appointments: &mut [Appointment], appointment_id: &str) -> bool {
    let Some(appointment) = appointments.iter_mut().find(|a| a.id == appointment_id) else {
        return false;
    };
    appointment.status = AppointmentStatus::Cancelled;
    true
}
