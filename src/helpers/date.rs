//! Date helper functions

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Date formats tried, in order, when normalizing a front-matter date.
/// The order is part of the contract: a string that several patterns
/// could accept resolves against the first one that parses.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%b %d, %Y", "%B %d, %Y"];

/// YAML timestamps arrive as strings; these are the shapes they take.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalize a front-matter `date` value into a calendar date.
///
/// String values are parsed against the timestamp shapes (keeping the
/// date portion) and then the date format list. Absent values,
/// non-string values, and strings no format accepts all fall back to
/// the current local date. Never fails.
pub fn normalize_date(value: Option<&serde_yaml::Value>) -> NaiveDate {
    match value {
        Some(serde_yaml::Value::String(s)) => {
            parse_date_string(s).unwrap_or_else(|| Local::now().date_naive())
        }
        _ => Local::now().date_naive(),
    }
}

/// Parse a date string in the supported formats
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Format a date for display using a chrono format string
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a date in full form (like "January 1, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
