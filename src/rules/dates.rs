// Date parsing and calendar comparison leaves.
//
// Comparisons work on whole calendar days normalized to UTC: both sides drop
// their time-of-day before comparing, so "later" means a strictly later date,
// never a later hour on the same day.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value::Value;

// Month-first forms mirror the wire format accepted by `is_date_format`;
// ISO forms are accepted because upstream callers commonly normalize to them.
const DATE_FORMATS: &[&str] = &["%m-%d-%Y", "%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parses a field value into a calendar date.
///
/// Strings try RFC 3339 first, then the fixed format list. Numbers are taken
/// as milliseconds since the Unix epoch. Booleans and `Absent` never parse.
pub(crate) fn parse_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Str(s) => parse_text(s.trim()),
        Value::Number(n) => {
            if !n.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(n.trunc() as i64).map(|dt| dt.date_naive())
        }
        Value::Bool(_) | Value::Absent => None,
    }
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.to_utc().date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// "Tue Aug 25 2026" style rendering used by the date-comparison messages.
pub(crate) fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
