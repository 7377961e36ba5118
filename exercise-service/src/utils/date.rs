//! Calendar date handling for exercise entries.
//!
//! Caller-supplied dates arrive in a handful of shapes (`1990-01-01`,
//! `1990/01/01`, `01-01-1990`, `Mon Jan 01 1990`). They are normalized to a
//! single separator before parsing, and always rendered back in the display
//! form so a returned date can be submitted again unchanged.

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// Display form of an entry date, e.g. `Mon Jan 01 1990`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Named-month shapes; numeric shapes go through `parse_numeric_date`.
const NAMED_FORMATS: &[&str] = &[DISPLAY_FORMAT, "%b %d %Y"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid date: {0}")]
pub struct InvalidDate(pub String);

/// Rewrite `-` and `.` to `/`, drop commas and collapse whitespace.
pub fn normalize_separators(raw: &str) -> String {
    let replaced: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .map(|c| match c {
            '-' | '.' => '/',
            other => other,
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    let normalized = normalize_separators(raw);
    if normalized.is_empty() {
        return Err(InvalidDate(raw.to_string()));
    }

    parse_numeric_date(&normalized)
        .or_else(|| {
            NAMED_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
        })
        .ok_or_else(|| InvalidDate(raw.to_string()))
}

/// `YYYY/MM/DD` or `MM/DD/YYYY`. The year must be written with four digits,
/// which is what tells the two orders apart.
fn parse_numeric_date(normalized: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = normalized.split('/').collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    if !parts
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let (year, month, day) = match (first.len(), second.len(), third.len()) {
        (4, 1..=2, 1..=2) => (first, second, third),
        (1..=2, 1..=2, 4) => (third, first, second),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parse an optional form/query value, treating blank input as absent.
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, InvalidDate> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Current calendar date on the server clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
