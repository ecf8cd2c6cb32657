//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The passport number does not split into a numeric series and number.
    #[error("invalid passport number '{0}', expected SSSS-NNNNNN")]
    InvalidPassportNumber(String),

    /// The filter key does not name a filterable user field.
    #[error("unknown user filter field: {0}")]
    UnknownFilterField(String),
}
