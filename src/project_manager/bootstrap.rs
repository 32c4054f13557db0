//! Wiring of the Project Manager store, seed data and services.

use crate::config::{DatabaseConfig, DatabaseKind};
use crate::persistence::{RepositoryResult, connect};
use crate::project_manager::{
    adapters::{
        memory::InMemoryProjectStore,
        postgres::{MIGRATIONS, PostgresProjectStore},
    },
    seed::seed,
    services::{Repositories, Services},
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::{error, info};

/// Opens the configured store, seeds it and returns the services.
///
/// Seeding failures are logged and do not abort start-up.
///
/// # Errors
///
/// Returns a repository error when the `PostgreSQL` pool cannot be built or
/// migrated.
pub async fn bootstrap(config: &DatabaseConfig) -> RepositoryResult<Services> {
    let repositories = match config.kind {
        DatabaseKind::InMemory => {
            info!(database = %config.name, "using in-memory project store");
            Repositories::from_store(InMemoryProjectStore::new())
        }
        DatabaseKind::Postgres => {
            info!(database = %config.name, "using PostgreSQL project store");
            let pool = connect(&config.connection_string, config.pool_size, MIGRATIONS).await?;
            Repositories::from_store(PostgresProjectStore::new(pool))
        }
    };
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);

    if let Err(err) = seed(&repositories, clock.as_ref()).await {
        error!(error = %err, "an error occurred while seeding the database");
    }

    Ok(Services::new(&repositories, &clock))
}
