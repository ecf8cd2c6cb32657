//! Error responses for the REST surface.
//!
//! Every failure is returned as `{"error": {"code": ..., "message": ...}}`.
//! Only invalid arguments are client errors; missing records, registry
//! failures, and store failures all answer 500.

use crate::error::ErrorKind;
use crate::task::services::TaskTrackingError;
use crate::user::services::UserProvisioningError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the HTTP status for a failure classification.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound | ErrorKind::ExternalService | ErrorKind::Persistence => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// The inner error object in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// The full error response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorBody,
}

/// Failure returned by a request handler.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Creates an error with a classification and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Rejected request input (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status the error is sent with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        status_for(self.kind)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = ErrorResponse {
            error: ErrorBody {
                code: self.kind.as_str().to_owned(),
                message: self.message,
            },
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<UserProvisioningError> for ApiError {
    fn from(err: UserProvisioningError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<TaskTrackingError> for ApiError {
    fn from(err: TaskTrackingError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}
