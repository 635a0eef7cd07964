//! Date utility functions
//!
//! The API exchanges dates as ISO `YYYY-MM-DD` strings; the dashboard shows
//! them in a fixed day-first format.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::EMPTY_VALUE;

/// Date format used on the wire
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default format for dates shown in tables and the detail view
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), ISO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a date or datetime string as sent by the API
///
/// Accepts plain dates, RFC 3339 timestamps and naive `T`/space separated
/// datetimes. Only the calendar date is kept.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = parse_date(value) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt.date());
        }
    }

    None
}

/// Format an API date for display
///
/// Missing, empty and unparseable values all render as the placeholder glyph.
pub fn format_display_date(value: Option<&str>, format: &str) -> String {
    match value.and_then(parse_api_date) {
        Some(date) => date.format(format).to_string(),
        None => EMPTY_VALUE.to_string(),
    }
}
