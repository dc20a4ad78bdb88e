// src/extract/dates.rs
//
// Relative "posted N units ago" captions → calendar dates.
// Months are 30 days and years 365 days; both are approximations.

use chrono::{Days, NaiveDate};

use crate::config::consts::DATE_FMT;

/// Parse a caption like "3 days ago" relative to `today`.
///
/// Unit keywords are tried in priority order: hour/minute (same day),
/// day, week, month, year. The count is the first run of digits.
/// Returns `None` without "ago", without a unit keyword, or when a
/// counted unit has no number.
pub fn parse_relative_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let t = text.to_lowercase();
    if !t.contains("ago") {
        return None;
    }
    if t.contains("hour") || t.contains("minute") {
        return Some(today);
    }

    let per_unit: u64 = if t.contains("day") {
        1
    } else if t.contains("week") {
        7
    } else if t.contains("month") {
        30
    } else if t.contains("year") {
        365
    } else {
        return None;
    };

    let days = first_number(&t)?.checked_mul(per_unit)?;
    today.checked_sub_days(Days::new(days))
}

/// First run of ASCII digits in `s`.
fn first_number(s: &str) -> Option<u64> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parse a stored date cell. Accepts `YYYY-MM-DD` optionally followed by a time.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    let head = cell.get(..10).unwrap_or(cell);
    NaiveDate::parse_from_str(head, DATE_FMT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}
