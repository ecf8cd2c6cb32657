//! Identity registry port.

use crate::user::domain::{PassportNumber, PersonalDetails};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity lookups.
pub type IdentityResult<T> = Result<T, IdentityResolverError>;

/// Resolves legal identity fields for a passport.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Looks up the identity registered for the passport series and number.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityResolverError`] when the registry cannot be reached,
    /// answers with a non-success status, or sends an unreadable body.
    async fn resolve(&self, passport: &PassportNumber) -> IdentityResult<PersonalDetails>;
}

/// Errors returned by identity resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityResolverError {
    /// The registry has no entry for the passport.
    #[error("no identity registered for passport {0}")]
    NotRegistered(PassportNumber),

    /// The registry answered with a non-success status.
    #[error("identity registry responded with status {0}")]
    UnexpectedStatus(u16),

    /// The registry response body could not be decoded.
    #[error("invalid identity registry response: {0}")]
    InvalidResponse(Arc<dyn std::error::Error + Send + Sync>),

    /// The registry could not be reached.
    #[error("identity registry unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityResolverError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding failure.
    pub fn invalid_response(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidResponse(Arc::new(err))
    }
}
