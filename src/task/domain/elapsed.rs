//! Elapsed duration of a stopped task.

use chrono::TimeDelta;
use serde::Serialize;

/// Whole hours and whole minutes of a work session.
///
/// Both values are truncated totals of the same duration: 150 minutes of
/// work is 2 hours and 150 minutes, not 2 hours and 30 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElapsedTime {
    hours: i64,
    minutes: i64,
}

impl ElapsedTime {
    /// Derives elapsed time from a duration; negative durations count as zero.
    #[must_use]
    pub fn from_duration(duration: TimeDelta) -> Self {
        let clamped = duration.max(TimeDelta::zero());
        Self {
            hours: clamped.num_hours(),
            minutes: clamped.num_minutes(),
        }
    }

    /// Reconstructs elapsed time from stored values.
    #[must_use]
    pub const fn from_parts(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    /// Returns the whole hours elapsed.
    #[must_use]
    pub const fn hours(self) -> i64 {
        self.hours
    }

    /// Returns the total whole minutes elapsed.
    #[must_use]
    pub const fn minutes(self) -> i64 {
        self.minutes
    }
}
