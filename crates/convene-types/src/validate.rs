//! Date and URL checks used by service-level validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a date string into a naive timestamp.
///
/// Accepts RFC 3339 (`2025-03-14T09:00:00Z`), plain dates (`2025-03-14`,
/// read as midnight) and local date-times with or without seconds.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Returns `true` if `input` parses as a date (see [`parse_date`]).
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// Returns `true` if `input` parses as an absolute URL.
pub fn is_valid_url(input: &str) -> bool {
    url::Url::parse(input.trim()).is_ok()
}
