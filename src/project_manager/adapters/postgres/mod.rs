//! `PostgreSQL` adapter for projects, tasks and users.

mod models;
mod projects;
mod schema;
mod tasks;
mod users;

use crate::persistence::{PgPool, RepositoryError, RepositoryResult};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Schema migrations for the Project Manager tables.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/project_manager");

/// `PostgreSQL`-backed store implementing every Project Manager port.
///
/// Cascades and set-null rules are enforced by the schema's foreign keys.
#[derive(Debug, Clone)]
pub struct PostgresProjectStore {
    pool: PgPool,
}

impl PostgresProjectStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn ensure_affected(affected: usize, entity: &'static str, id: i32) -> RepositoryResult<()> {
    if affected == 0 {
        return Err(RepositoryError::NotFound { entity, id });
    }
    Ok(())
}

fn to_count(total: i64) -> RepositoryResult<u64> {
    u64::try_from(total).map_err(RepositoryError::persistence)
}
