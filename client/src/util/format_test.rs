use time::macros::{date, datetime};

use super::*;

#[test]
fn format_date_uses_short_month_without_padding() {
    assert_eq!(format_date(date!(2023 - 07 - 01)), "Jul 1, 2023");
    assert_eq!(format_date(date!(2023 - 12 - 25)), "Dec 25, 2023");
}

#[test]
fn format_date_time_uses_twelve_hour_clock() {
    assert_eq!(format_date_time(datetime!(2023-09-15 10:30)), "Sep 15, 2023, 10:30 AM");
    assert_eq!(format_date_time(datetime!(2023-09-15 14:05)), "Sep 15, 2023, 02:05 PM");
}

#[test]
fn format_time_only() {
    assert_eq!(format_time(datetime!(2023-09-15 00:15)), "12:15 AM");
}

#[test]
fn iso_date_round_trip() {
    let day = date!(2024 - 02 - 29);
    assert_eq!(format_iso_date(day), "2024-02-29");
    assert_eq!(parse_iso_date(" 2024-02-29 "), Some(day));
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("2023-02-30"), None);
    assert_eq!(parse_iso_date("02/03/2023"), None);
}
