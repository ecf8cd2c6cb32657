//! Failure taxonomy shared by the user and task services.
//!
//! Service errors stay specific to their bounded context; [`ErrorKind`] is
//! the coarse classification the transport layer maps onto responses.

use serde::Serialize;
use std::fmt;

/// Coarse failure classification surfaced by every service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed passport, unparseable dates, or other rejected input.
    InvalidArgument,
    /// A user or task identifier does not exist.
    NotFound,
    /// The identity registry was unreachable or answered with a failure.
    ExternalService,
    /// The store rejected or failed the operation.
    Persistence,
}

impl ErrorKind {
    /// Returns the canonical machine-readable code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::ExternalService => "external_service_error",
            Self::Persistence => "persistence_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
