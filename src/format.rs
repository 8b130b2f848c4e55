//! Date parsing and display helpers shared by the views.
//!
//! The API sends local date-times without an offset (`2024-07-02T17:30:00`)
//! and accepts bare dates from the session form (`2024-07-04`).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns the `time` parse error for anything else.
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

/// Parse a wire timestamp. A bare date means midnight.
///
/// # Errors
///
/// Returns the parse error of the date-only attempt when neither shape fits.
pub fn parse_datetime(value: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    let full = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    if let Ok(dt) = PrimitiveDateTime::parse(value, full) {
        return Ok(dt);
    }
    parse_date(value).map(|d| d.with_time(Time::MIDNIGHT))
}

/// Render a timestamp the way the API expects it back.
#[must_use]
pub fn wire_datetime(dt: PrimitiveDateTime) -> String {
    dt.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// `YYYY-MM-DD`, the value a date input expects.
#[must_use]
pub fn input_date(dt: PrimitiveDateTime) -> String {
    dt.date().format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// `July 7, 2024`.
#[must_use]
pub fn long_date(dt: PrimitiveDateTime) -> String {
    // Formatting a PrimitiveDateTime with date-only components cannot fail.
    dt.format(format_description!("[month repr:long] [day padding:none], [year]"))
        .unwrap_or_default()
}

/// Card heading on the sessions list: `Session on July 7, 2024`.
#[must_use]
pub fn session_heading(dt: PrimitiveDateTime) -> String {
    format!("Session on {}", long_date(dt))
}

/// `John DOE`.
#[must_use]
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {}", last_name.to_uppercase())
}
