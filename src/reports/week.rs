//! Week window calculations
//!
//! Resolves the Monday-to-Sunday calendar week containing a date and
//! enumerates the week-start markers covering a span of dates.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};

/// The Monday-to-Sunday calendar week containing a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// Monday of the week
    pub start: NaiveDate,
    /// Sunday of the week
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Check whether a date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolve the week window containing the given date
pub fn week_window(date: NaiveDate) -> WeekWindow {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    WeekWindow {
        start,
        end: start + Duration::days(6),
    }
}

/// Resolve the week window for an optional date
///
/// An absent date resolves to the current week.
pub fn week_window_or_today(date: Option<NaiveDate>) -> WeekWindow {
    week_window(date.unwrap_or_else(|| Local::now().date_naive()))
}

/// Parse a date in `YYYY-MM-DD` format
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDateFormat(input.to_string()))
}

/// Enumerate week-start markers from `from` up to `to` inclusive
///
/// Markers step seven days from `from`, whatever its weekday. Returns
/// an empty list when `from` is after `to`.
pub fn week_starts(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut cursor = from;
    while cursor <= to {
        starts.push(cursor);
        cursor += Duration::days(7);
    }
    starts
}
