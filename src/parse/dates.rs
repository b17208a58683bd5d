//! ISO-8601 date parsing
//!
//! Instants are wall-clock times without a timezone. Strings carrying an
//! offset (`Z`, `+02:00`) are normalised to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ConfigError, DateParseError};
use crate::models::ViewMonth;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Parse an ISO-8601 date or date-time string into an instant.
///
/// A bare date (`2024-06-03`) means 00:00 of that day.
pub fn parse_instant(text: &str) -> Result<NaiveDateTime, DateParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }
    let unparsable = || DateParseError::Unparsable(text.to_string());

    // Zulu suffix: same wall clock, already UTC
    if let Some(stripped) = text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        return parse_naive(stripped).ok_or_else(unparsable);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt.naive_utc());
        }
    }

    parse_naive(text).ok_or_else(unparsable)
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a date attribute (`selected`, `view`); any time part is dropped
pub fn parse_date(text: &str) -> Result<NaiveDate, ConfigError> {
    Ok(parse_instant(text)?.date())
}

/// Parse the `view` attribute: any date inside the month to display
pub fn parse_view(text: &str) -> Result<ViewMonth, ConfigError> {
    parse_date(text).map(ViewMonth::containing)
}

/// Parse an `<input type="month">` value (`YYYY-MM`)
pub fn parse_month_input(text: &str) -> Result<ViewMonth, ConfigError> {
    let invalid = || ConfigError::InvalidMonth(text.to_string());
    let (year, month) = text.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    ViewMonth::new(year, month)
}
