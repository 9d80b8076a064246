// File: src/validators.rs
// Purpose: Format checks backing the built-in rules

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::FieldValue;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// Vietnamese mobile numbers: 0, then 3/5/7/8/9, then 8 digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0[35789][0-9]{8}$").expect("phone pattern compiles")
});

// Year-first, or month-first with slashes; no day-first layout
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a 10-digit local mobile number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Length in characters of the trimmed string
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Read a calendar date out of a form value
///
/// Accepts ISO dates and datetimes (with or without offset), `YYYY/MM/DD`,
/// `MM/DD/YYYY`, and millisecond timestamps for numeric values. Day/month
/// order is never guessed: the only non-year-first layout is month-first,
/// so `12/01/2024` is 1 December and `01-12-2024` is rejected.
pub fn parse_date(value: &FieldValue) -> Option<NaiveDate> {
    match value {
        FieldValue::Number(ms) => {
            if !ms.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        FieldValue::Bool(b) => {
            DateTime::from_timestamp_millis(i64::from(*b)).map(|dt| dt.date_naive())
        }
        FieldValue::Text(s) => parse_date_str(s),
        FieldValue::List(_) => parse_date_str(&value.to_form_string()),
        FieldValue::Absent | FieldValue::Null | FieldValue::Object(_) => None,
    }
}

/// Parse a date string in any of the accepted layouts
pub fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
}
