//! Repository port for user persistence and listing.

use crate::user::domain::{NewUser, Pagination, PassportNumber, User, UserFilters, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicatePassport`] when the passport
    /// number is already registered.
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Returns every user.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;

    /// Returns one page of users matching every filter by equality.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::UnknownFilterField`] when a filter key
    /// does not name a user column.
    async fn list_filtered(
        &self,
        filters: &UserFilters,
        pagination: Pagination,
    ) -> UserRepositoryResult<Vec<User>>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Deletes a user. Deleting an absent identifier succeeds.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same passport number already exists.
    #[error("duplicate passport number: {0}")]
    DuplicatePassport(PassportNumber),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// A filter key does not name a user column.
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),

    /// A filter value cannot be compared with its column.
    #[error("invalid value '{value}' for filter field {field}")]
    InvalidFilterValue {
        /// Filter key.
        field: String,
        /// Rejected value.
        value: String,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
