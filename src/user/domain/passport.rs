//! Passport number parsing.

use super::UserDomainError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Byte range holding the passport series.
const SERIES_END: usize = 4;

/// First byte of the passport number; the separator before it is skipped.
const NUMBER_START: usize = 5;

/// Passport number in `SSSS-NNNNNN` form, split into its numeric parts.
///
/// The series is taken from characters `[0, 4)` and the number from `[5, end)`.
/// The separator at index 4 is skipped without being checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassportNumber {
    raw: String,
    series: i64,
    number: i64,
}

impl PassportNumber {
    /// Parses a passport number.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidPassportNumber`] when either the series
    /// or the number substring is missing or is not an integer.
    pub fn parse(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let parsed_series = raw
            .get(..SERIES_END)
            .and_then(|part| part.parse::<i64>().ok());
        let parsed_number = raw
            .get(NUMBER_START..)
            .and_then(|part| part.parse::<i64>().ok());

        match (parsed_series, parsed_number) {
            (Some(series), Some(number)) => Ok(Self {
                raw,
                series,
                number,
            }),
            _ => Err(UserDomainError::InvalidPassportNumber(raw)),
        }
    }

    /// Returns the passport number exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the numeric passport series.
    #[must_use]
    pub const fn series(&self) -> i64 {
        self.series
    }

    /// Returns the numeric passport number.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }
}

impl AsRef<str> for PassportNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PassportNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
