//! Data-loading helpers for pages.
//!
//! There is no data backend: every call resolves fixture data from
//! `net::mock` after a simulated network delay. Pages drive these through
//! `LocalResource`, so a load still in flight when the page unmounts is
//! dropped instead of writing into a dead view.
//!
//! Client-side (hydrate): delays via `gloo-timers`.
//! Server-side (SSR): resolves immediately.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use time::Date;

use super::mock;
use crate::state::appointments::Appointment;
use crate::state::cases::LegalCase;
use crate::state::clients::ClientRecord;
use crate::state::legal_ai::{self, LegalQuery};
use crate::state::session::Role;

pub const DASHBOARD_DELAY_MS: u32 = 1000;
pub const CASES_DELAY_MS: u32 = 800;
pub const ASSISTANT_DELAY_MS: u32 = 2000;

/// Everything the client dashboard shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOverview {
    pub cases: Vec<LegalCase>,
    pub appointments: Vec<Appointment>,
    pub queries: Vec<LegalQuery>,
}

/// Everything the lawyer dashboard shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawyerOverview {
    pub cases: Vec<LegalCase>,
    pub appointments: Vec<Appointment>,
    pub clients: Vec<ClientRecord>,
}

async fn simulate_latency(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

pub async fn fetch_client_overview(today: Date) -> ClientOverview {
    simulate_latency(DASHBOARD_DELAY_MS).await;
    ClientOverview {
        cases: mock::client_cases(),
        appointments: mock::client_appointments(today),
        queries: mock::client_queries(),
    }
}

pub async fn fetch_lawyer_overview(today: Date) -> LawyerOverview {
    simulate_latency(DASHBOARD_DELAY_MS).await;
    LawyerOverview {
        cases: mock::lawyer_cases(),
        appointments: mock::lawyer_appointments(today),
        clients: mock::clients(),
    }
}

/// Cases visible to `role`: a client's own, or a lawyer's caseload.
pub async fn fetch_cases(role: Role) -> Vec<LegalCase> {
    simulate_latency(CASES_DELAY_MS).await;
    match role {
        Role::Client => mock::client_cases(),
        Role::Lawyer => mock::lawyer_cases(),
    }
}

/// Ask the assistant a question; resolves to a markdown answer.
pub async fn ask_legal_question(question: String) -> String {
    simulate_latency(ASSISTANT_DELAY_MS).await;
    legal_ai::answer(&question)
}
