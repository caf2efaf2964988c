//! Fixture data standing in for a backend.
//!
//! Appointment times are laid out relative to `today` so "upcoming" views
//! stay populated whenever the app is opened.

use time::macros::{date, time};
use time::{Date, Duration, PrimitiveDateTime};

use crate::state::appointments::{Appointment, AppointmentStatus};
use crate::state::cases::{CaseStatus, LegalCase, Priority};
use crate::state::clients::ClientRecord;
use crate::state::legal_ai::{LegalQuery, QueryStatus};

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    client: (&str, &str),
    title: &str,
    description: &str,
    category: &str,
    status: CaseStatus,
    priority: Priority,
    created_at: Date,
    updated_at: Date,
) -> LegalCase {
    LegalCase {
        id: id.to_owned(),
        client_id: client.0.to_owned(),
        client_name: client.1.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        status,
        priority,
        due_date: None,
        documents: Vec::new(),
        created_at,
        updated_at,
    }
}

const SELF_CLIENT: (&str, &str) = ("123", "You");

/// Cases belonging to the signed-in client.
#[must_use]
pub fn client_cases() -> Vec<LegalCase> {
    vec![
        case(
            "1",
            SELF_CLIENT,
            "Contract Review - Johnson Corp",
            "Review of the employment contract with Johnson Corporation",
            "Contract Law",
            CaseStatus::InProgress,
            Priority::Medium,
            date!(2023 - 06 - 12),
            date!(2023 - 07 - 01),
        ),
        case(
            "2",
            SELF_CLIENT,
            "Trademark Registration - TechBrand",
            "Assistance with trademark registration for new product line",
            "Intellectual Property",
            CaseStatus::New,
            Priority::High,
            date!(2023 - 08 - 20),
            date!(2023 - 08 - 20),
        ),
        case(
            "3",
            SELF_CLIENT,
            "Property Dispute - 123 Main St",
            "Boundary dispute with neighboring property",
            "Real Estate",
            CaseStatus::Pending,
            Priority::Medium,
            date!(2023 - 05 - 05),
            date!(2023 - 07 - 15),
        ),
        case(
            "4",
            SELF_CLIENT,
            "Will Preparation",
            "Drafting of last will and testament",
            "Estate Planning",
            CaseStatus::Closed,
            Priority::Low,
            date!(2023 - 03 - 10),
            date!(2023 - 04 - 05),
        ),
        case(
            "5",
            SELF_CLIENT,
            "Divorce Proceedings",
            "Assistance with divorce filing and settlements",
            "Family Law",
            CaseStatus::InProgress,
            Priority::High,
            date!(2023 - 07 - 05),
            date!(2023 - 08 - 25),
        ),
    ]
}

/// Caseload across all of a lawyer's clients.
#[must_use]
pub fn lawyer_cases() -> Vec<LegalCase> {
    vec![
        case(
            "101",
            ("c1", "Emily Carter"),
            "Wrongful Termination Claim",
            "Employee dismissed shortly after filing a safety complaint",
            "Employment Law",
            CaseStatus::InProgress,
            Priority::High,
            date!(2023 - 07 - 02),
            date!(2023 - 08 - 28),
        ),
        case(
            "102",
            ("c2", "Robert Chen"),
            "Commercial Lease Negotiation",
            "Renewal terms for a downtown retail space",
            "Real Estate",
            CaseStatus::New,
            Priority::Medium,
            date!(2023 - 08 - 14),
            date!(2023 - 08 - 14),
        ),
        case(
            "103",
            ("c3", "Amanda Brooks"),
            "Custody Modification",
            "Request to modify an existing custody arrangement",
            "Family Law",
            CaseStatus::Pending,
            Priority::High,
            date!(2023 - 06 - 19),
            date!(2023 - 08 - 30),
        ),
        case(
            "104",
            ("c1", "Emily Carter"),
            "Non-Compete Review",
            "Enforceability review of a non-compete clause",
            "Contract Law",
            CaseStatus::Resolved,
            Priority::Low,
            date!(2023 - 04 - 11),
            date!(2023 - 05 - 22),
        ),
        case(
            "105",
            ("c4", "David Okafor"),
            "Patent Infringement Defense",
            "Response to a cease-and-desist letter over a hardware design",
            "Intellectual Property",
            CaseStatus::InProgress,
            Priority::High,
            date!(2023 - 05 - 30),
            date!(2023 - 09 - 01),
        ),
    ]
}

fn at(today: Date, days: i64, hour: u8, minute: u8) -> PrimitiveDateTime {
    let day = today.saturating_add(Duration::days(days));
    let clock = time::Time::from_hms(hour, minute, 0).unwrap_or(time!(9:00));
    PrimitiveDateTime::new(day, clock)
}

/// Appointments seen from the client side.
#[must_use]
pub fn client_appointments(today: Date) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_owned(),
            title: "Initial Consultation".to_owned(),
            lawyer_name: "Sarah Mitchell".to_owned(),
            client_name: None,
            at: at(today, 3, 10, 30),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "2".to_owned(),
            title: "Contract Review".to_owned(),
            lawyer_name: "Michael Johnson".to_owned(),
            client_name: None,
            at: at(today, 6, 14, 0),
            status: AppointmentStatus::Confirmed,
        },
    ]
}

/// Appointments on a lawyer's calendar.
#[must_use]
pub fn lawyer_appointments(today: Date) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "201".to_owned(),
            title: "Deposition Prep".to_owned(),
            lawyer_name: "You".to_owned(),
            client_name: Some("Emily Carter".to_owned()),
            at: at(today, 0, 15, 0),
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: "202".to_owned(),
            title: "Lease Terms Call".to_owned(),
            lawyer_name: "You".to_owned(),
            client_name: Some("Robert Chen".to_owned()),
            at: at(today, 2, 11, 0),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "203".to_owned(),
            title: "Custody Hearing Strategy".to_owned(),
            lawyer_name: "You".to_owned(),
            client_name: Some("Amanda Brooks".to_owned()),
            at: at(today, 2, 16, 30),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "204".to_owned(),
            title: "Patent Claim Review".to_owned(),
            lawyer_name: "You".to_owned(),
            client_name: Some("David Okafor".to_owned()),
            at: at(today, -4, 9, 30),
            status: AppointmentStatus::Confirmed,
        },
    ]
}

#[must_use]
pub fn client_queries() -> Vec<LegalQuery> {
    vec![
        LegalQuery {
            id: "1".to_owned(),
            question: "What are my rights as a tenant if my landlord refuses to make repairs?".to_owned(),
            asked_at: date!(2023 - 08 - 28),
            status: QueryStatus::Answered,
        },
        LegalQuery {
            id: "2".to_owned(),
            question: "How do I file for copyright protection for my new software?".to_owned(),
            asked_at: date!(2023 - 09 - 02),
            status: QueryStatus::Pending,
        },
    ]
}

#[must_use]
pub fn clients() -> Vec<ClientRecord> {
    vec![
        ClientRecord {
            id: "c1".to_owned(),
            name: "Emily Carter".to_owned(),
            email: "emily.carter@example.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            joined_at: date!(2023 - 01 - 15),
            cases_count: 2,
        },
        ClientRecord {
            id: "c2".to_owned(),
            name: "Robert Chen".to_owned(),
            email: "robert.chen@example.com".to_owned(),
            phone: "(555) 234-5678".to_owned(),
            joined_at: date!(2023 - 03 - 02),
            cases_count: 1,
        },
        ClientRecord {
            id: "c3".to_owned(),
            name: "Amanda Brooks".to_owned(),
            email: "amanda.brooks@example.com".to_owned(),
            phone: "(555) 345-6789".to_owned(),
            joined_at: date!(2023 - 04 - 27),
            cases_count: 1,
        },
        ClientRecord {
            id: "c4".to_owned(),
            name: "David Okafor".to_owned(),
            email: "david.okafor@example.com".to_owned(),
            phone: "(555) 456-7890".to_owned(),
            joined_at: date!(2023 - 05 - 11),
            cases_count: 1,
        },
    ]
}
