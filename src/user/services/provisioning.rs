//! Service layer for user provisioning.
//!
//! Provides [`UserProvisioningService`], which resolves identities for new
//! passports and coordinates user reads, updates, deletes, and filtered
//! listings.

use crate::error::ErrorKind;
use crate::user::{
    domain::{
        NewUser, Pagination, PassportNumber, PersonalDetails, User, UserDomainError, UserFilters,
        UserId,
    },
    ports::{IdentityResolver, IdentityResolverError, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for user provisioning operations.
#[derive(Debug, Error)]
pub enum UserProvisioningError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// The requested user does not exist.
    #[error("user {0} not found")]
    NotFound(UserId),

    /// The identity registry lookup failed.
    #[error(transparent)]
    Identity(#[from] IdentityResolverError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl UserProvisioningError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) | Self::Repository(UserRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Identity(_) => ErrorKind::ExternalService,
            Self::Repository(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type for user provisioning operations.
pub type UserProvisioningResult<T> = Result<T, UserProvisioningError>;

/// User provisioning orchestration service.
pub struct UserProvisioningService<R, I, C>
where
    R: UserRepository + ?Sized,
    I: IdentityResolver + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    resolver: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> Clone for UserProvisioningService<R, I, C>
where
    R: UserRepository + ?Sized,
    I: IdentityResolver + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            resolver: Arc::clone(&self.resolver),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, I, C> UserProvisioningService<R, I, C>
where
    R: UserRepository + ?Sized,
    I: IdentityResolver + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new user provisioning service.
    #[must_use]
    pub const fn new(repository: Arc<R>, resolver: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            resolver,
            clock,
        }
    }

    /// Provisions a user for a passport number.
    ///
    /// The identity registry is consulted before anything is stored, so a
    /// failed lookup never leaves a user behind.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::Domain`] for a malformed passport
    /// number, [`UserProvisioningError::Identity`] when the registry lookup
    /// fails, or [`UserProvisioningError::Repository`] when the store rejects
    /// the user (including duplicate passport numbers).
    pub async fn create_user(&self, passport_number: &str) -> UserProvisioningResult<User> {
        tracing::info!(passport_number, "creating user");
        let result = self.provision(passport_number).await;
        match &result {
            Ok(user) => tracing::info!(user_id = %user.id(), "user created"),
            Err(err) => tracing::debug!(error = %err, passport_number, "user creation failed"),
        }
        result
    }

    async fn provision(&self, passport_number: &str) -> UserProvisioningResult<User> {
        let passport = PassportNumber::parse(passport_number)?;
        let details = self.resolver.resolve(&passport).await?;
        let new_user = NewUser::new(passport, details, &*self.clock);
        Ok(self.repository.create(&new_user).await?)
    }

    /// Returns the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::NotFound`] when the user does not
    /// exist, or [`UserProvisioningError::Repository`] when the lookup fails.
    pub async fn get_user_by_id(&self, id: UserId) -> UserProvisioningResult<User> {
        tracing::info!(user_id = %id, "fetching user");
        let result = self.find_by_id_or_error(id).await;
        if let Err(err) = &result {
            log_lookup_failure(id, err);
        }
        result
    }

    /// Returns every user.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::Repository`] when the listing fails.
    pub async fn list_users(&self) -> UserProvisioningResult<Vec<User>> {
        tracing::info!("listing users");
        let users = self
            .repository
            .list_all()
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "user listing failed"))?;
        tracing::info!(count = users.len(), "users listed");
        Ok(users)
    }

    /// Returns one page of users whose fields equal every filter value.
    ///
    /// The `page` and `pageSize` keys are removed from `filters` before the
    /// remaining keys reach the store; no other key is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::Repository`] when the store rejects a
    /// filter key or value, or when the listing fails.
    pub async fn list_users_filtered(
        &self,
        filters: UserFilters,
        pagination: Pagination,
    ) -> UserProvisioningResult<Vec<User>> {
        let data_filters = filters.without_pagination_keys();
        tracing::info!(
            filters = data_filters.len(),
            page = pagination.page(),
            page_size = pagination.page_size(),
            "listing users with filters"
        );
        let users = self
            .repository
            .list_filtered(&data_filters, pagination)
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "filtered user listing failed"))?;
        tracing::info!(count = users.len(), "filtered users listed");
        Ok(users)
    }

    /// Overwrites the identity fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::NotFound`] when the user does not
    /// exist, or [`UserProvisioningError::Repository`] when persistence fails.
    pub async fn update_user(
        &self,
        id: UserId,
        details: PersonalDetails,
    ) -> UserProvisioningResult<User> {
        tracing::info!(user_id = %id, "updating user");
        let result = self.apply_update(id, details).await;
        match &result {
            Ok(_) => tracing::info!(user_id = %id, "user updated"),
            Err(err) => tracing::debug!(error = %err, user_id = %id, "user update failed"),
        }
        result
    }

    /// Deletes a user. Deleting an unknown identifier succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`UserProvisioningError::Repository`] when the delete fails.
    pub async fn delete_user(&self, id: UserId) -> UserProvisioningResult<()> {
        tracing::info!(user_id = %id, "deleting user");
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| {
                tracing::debug!(error = %err, user_id = %id, "user delete failed");
            })?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn apply_update(
        &self,
        id: UserId,
        details: PersonalDetails,
    ) -> UserProvisioningResult<User> {
        let mut user = self.find_by_id_or_error(id).await?;
        user.update_details(details, &*self.clock);
        self.repository.update(&user).await?;
        Ok(user)
    }

    async fn find_by_id_or_error(&self, id: UserId) -> UserProvisioningResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserProvisioningError::NotFound(id))
    }
}

fn log_lookup_failure(id: UserId, err: &UserProvisioningError) {
    if matches!(err, UserProvisioningError::NotFound(_)) {
        tracing::debug!(user_id = %id, "user not found");
    } else {
        tracing::debug!(error = %err, user_id = %id, "user lookup failed");
    }
}
