//! Error types for task domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A period bound is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The task has already been stopped.
    #[error("task {0} is already stopped")]
    AlreadyStopped(TaskId),
}
