//! Calendar-date bounds for task listings.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Listing window between two calendar dates, each taken at midnight UTC.
///
/// The bounds are not ordered against each other; a start after the end
/// simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TaskPeriod {
    /// Parses both bounds from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDate`] naming the first bound that
    /// does not parse.
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, TaskDomainError> {
        Ok(Self {
            start: parse_midnight(start_date)?,
            end: parse_midnight(end_date)?,
        })
    }

    /// Creates a period from explicit instants.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive lower bound for task start times.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the inclusive upper bound for task end times.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when a session lies inside the period.
    ///
    /// A running session has no end time and is bounded by its start alone.
    #[must_use]
    pub fn contains(&self, start_time: DateTime<Utc>, end_time: Option<DateTime<Utc>>) -> bool {
        start_time >= self.start && end_time.is_none_or(|end| end <= self.end)
    }
}

/// `YYYY-MM-DD`: ten bytes, dashes at offsets 4 and 7, digits elsewhere.
fn is_canonical_date(value: &str) -> bool {
    value.len() == 10
        && value
            .bytes()
            .enumerate()
            .all(|(offset, byte)| match offset {
                4 | 7 => byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}

fn parse_midnight(value: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    if !is_canonical_date(value) {
        return Err(TaskDomainError::InvalidDate(value.to_owned()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| TaskDomainError::InvalidDate(value.to_owned()))
}
