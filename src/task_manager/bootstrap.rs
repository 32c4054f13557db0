//! Wiring of the Task Manager store, seed data and service.

use crate::config::{DatabaseConfig, DatabaseKind};
use crate::persistence::{RepositoryResult, connect};
use crate::task_manager::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::{MIGRATIONS, PostgresTaskRepository},
    },
    ports::TaskRepository,
    seed::seed,
    services::TaskService,
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::{error, info};

/// Opens the configured store, seeds it and returns the task service.
///
/// Seeding failures are logged and do not abort start-up.
///
/// # Errors
///
/// Returns a repository error when the `PostgreSQL` pool cannot be built or
/// migrated.
pub async fn bootstrap(config: &DatabaseConfig) -> RepositoryResult<TaskService> {
    let repository: Arc<dyn TaskRepository> = match config.kind {
        DatabaseKind::InMemory => {
            info!(database = %config.name, "using in-memory task store");
            Arc::new(InMemoryTaskRepository::new())
        }
        DatabaseKind::Postgres => {
            info!(database = %config.name, "using PostgreSQL task store");
            let pool = connect(&config.connection_string, config.pool_size, MIGRATIONS).await?;
            Arc::new(PostgresTaskRepository::new(pool))
        }
    };
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);

    if let Err(err) = seed(repository.as_ref(), clock.as_ref()).await {
        error!(error = %err, "an error occurred while seeding the database");
    }

    Ok(TaskService::new(repository, clock))
}
