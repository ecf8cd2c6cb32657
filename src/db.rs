//! Connection pool construction and schema setup.

use crate::config::DatabaseConfig;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by every repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema for users and tasks; every statement is idempotent.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2024-06-01-000000_create_users_and_tasks/up.sql");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not be built or could not hand out a connection.
    #[error("database connection failed: {0}")]
    Pool(#[from] PoolError),

    /// A schema statement failed.
    #[error("schema migration failed: {0}")]
    Migration(#[from] diesel::result::Error),

    /// The blocking setup task did not complete.
    #[error("database setup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds the connection pool for the configured database.
///
/// # Errors
///
/// Returns [`DatabaseError::Pool`] when the initial connections cannot be
/// opened.
pub fn build_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url());
    Ok(Pool::builder().max_size(config.pool_size).build(manager)?)
}

/// Applies the schema on a pooled connection.
///
/// # Errors
///
/// Returns [`DatabaseError`] when no connection is available or a statement
/// fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
        let mut connection = shared.get()?;
        connection.batch_execute(SCHEMA_SQL)?;
        tracing::info!("database schema is up to date");
        Ok(())
    })
    .await?
}
