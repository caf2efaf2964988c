use time::macros::{date, datetime};

use super::*;
use crate::net::mock;

// =============================================================
// Upcoming
// =============================================================

#[test]
fn upcoming_excludes_past_and_cancelled() {
    let today = date!(2024 - 03 - 10);
    let mut list = mock::lawyer_appointments(today);
    let now = datetime!(2024-03-10 12:00);

    // 201 today 15:00, 202 and 203 in two days; 204 is in the past.
    assert_eq!(upcoming_count(&list, now), 3);

    assert!(cancel(&mut list, "202"));
    assert_eq!(upcoming_count(&list, now), 2);
}

#[test]
fn appointment_at_now_is_not_upcoming() {
    let today = date!(2024 - 03 - 10);
    let list = mock::lawyer_appointments(today);
    let first = list.iter().find(|a| a.id == "201").unwrap();
    assert!(!is_upcoming(first, first.at));
}

// =============================================================
// Day view
// =============================================================

#[test]
fn on_date_returns_time_ordered_matches() {
    let today = date!(2024 - 03 - 10);
    let mut list = mock::lawyer_appointments(today);
    list.reverse();

    let day = on_date(&list, date!(2024 - 03 - 12));
    let ids: Vec<&str> = day.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["202", "203"]);
    assert!(on_date(&list, date!(2024 - 03 - 11)).is_empty());
}

#[test]
fn cancel_unknown_id_returns_false() {
    let mut list = mock::lawyer_appointments(date!(2024 - 03 - 10));
    assert!(!cancel(&mut list, "nope"));
    assert!(list.iter().all(|a| a.status != AppointmentStatus::Cancelled));
}
