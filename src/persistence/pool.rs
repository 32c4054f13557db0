//! `PostgreSQL` connection pool construction and blocking execution.

use super::{RepositoryError, RepositoryResult};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tracing::info;

/// `PostgreSQL` connection pool type used by the Diesel adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool and applies pending migrations.
///
/// Runs on the blocking thread pool because both steps perform synchronous
/// network I/O.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the pool cannot connect or a
/// migration fails.
pub async fn connect(
    url: &str,
    max_size: u32,
    migrations: EmbeddedMigrations,
) -> RepositoryResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(url);
    tokio::task::spawn_blocking(move || {
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(RepositoryError::persistence)?;
        let mut connection = pool.get().map_err(RepositoryError::persistence)?;
        let applied = connection
            .run_pending_migrations(migrations)
            .map_err(|err| RepositoryError::Persistence(Arc::from(err)))?;
        info!(applied = applied.len(), "database schema is up to date");
        Ok(pool)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

/// Runs a Diesel operation on a pooled connection off the async runtime.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when no connection is available
/// or the blocking task fails, and otherwise whatever `f` returns.
pub async fn run_blocking<F, T>(pool: &PgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}
