//! Date formatting for cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// `Jul 1, 2023`
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_default()
}

/// `Sep 15, 2023, 10:30 AM`
#[must_use]
pub fn format_date_time(at: PrimitiveDateTime) -> String {
    at.format(format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12 padding:zero]:[minute] [period]"
    ))
    .unwrap_or_default()
}

/// `10:30 AM`
#[must_use]
pub fn format_time(at: PrimitiveDateTime) -> String {
    at.format(format_description!("[hour repr:12 padding:zero]:[minute] [period]"))
        .unwrap_or_default()
}

/// ISO day (`2023-07-01`), the value format of `<input type="date">`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Parse the value of an `<input type="date">`.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Current wall-clock time in UTC.
#[must_use]
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}
