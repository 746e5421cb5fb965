//! Date validation and formatting for API queries.
//!
//! The API expects the calendar date as seen at the caller's location, so
//! formatting always reads the value's own year/month/day fields and never
//! converts to UTC first.

use chrono::{Datelike, NaiveDate};

use crate::error::UvError;

/// Render a date as `YYYY-MM-DD` from its own calendar fields.
///
/// For a `DateTime<Tz>` this is the date in `Tz`, so a local midnight never
/// slides back a day.
pub fn format_date(date: &impl Datelike) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Build a date from a year, a 1-based month and a day.
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, UvError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| UvError::InvalidDate {
        input: format!("{year}-{month}-{day}"),
    })
}

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_date(input: &str) -> Result<NaiveDate, UvError> {
    let invalid = || UvError::InvalidDate { input: input.to_string() };

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let field = |range: std::ops::Range<usize>| input[range].parse::<u32>().map_err(|_| invalid());
    let year = field(0..4)?;
    let month = field(5..7)?;
    let day = field(8..10)?;

    date_from_ymd(year as i32, month, day).map_err(|_| invalid())
}
