//! Composition root: wires adapters and services from configuration.

use crate::api::{AppState, TaskService, UserService};
use crate::config::{Config, StorageBackend};
use crate::db::{self, DatabaseError};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use crate::user::{
    adapters::{
        http::HttpIdentityResolver, memory::InMemoryUserRepository,
        postgres::PostgresUserRepository,
    },
    ports::{IdentityResolver, IdentityResolverError, UserRepository},
};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The database could not be prepared.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The identity registry client could not be built.
    #[error(transparent)]
    Identity(#[from] IdentityResolverError),
}

/// Builds handler state for the configured storage backend.
///
/// The `postgres` backend opens a pool and applies the schema before
/// returning; the `memory` backend keeps everything in process.
///
/// # Errors
///
/// Returns [`StartupError`] when the database or the registry client cannot
/// be prepared.
pub async fn build_state(config: &Config) -> Result<AppState, StartupError> {
    let resolver: Arc<dyn IdentityResolver> = Arc::new(HttpIdentityResolver::new(
        config.identity.base_url.clone(),
        config.identity.timeout(),
    )?);

    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = db::build_pool(&config.database)?;
            db::run_migrations(&pool).await?;
            tracing::info!(
                host = %config.database.host,
                database = %config.database.name,
                "using postgres storage"
            );
            Ok(wire(
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresTaskRepository::new(pool)),
                resolver,
            ))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            Ok(in_memory_state(resolver))
        }
    }
}

/// Builds handler state over fresh in-memory stores.
#[must_use]
pub fn in_memory_state(resolver: Arc<dyn IdentityResolver>) -> AppState {
    wire(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryTaskRepository::new()),
        resolver,
    )
}

fn wire(
    users: Arc<dyn UserRepository>,
    tasks: Arc<dyn TaskRepository>,
    resolver: Arc<dyn IdentityResolver>,
) -> AppState {
    let clock = Arc::new(DefaultClock);
    AppState::new(
        UserService::new(users, resolver, Arc::clone(&clock)),
        TaskService::new(tasks, clock),
    )
}
