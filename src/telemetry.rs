//! Logging initialisation.

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Failure to install the global subscriber.
#[derive(Debug, Error)]
#[error("failed to initialise logging: {0}")]
pub struct TelemetryError(#[source] Box<dyn std::error::Error + Send + Sync>);

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set.
pub fn init_tracing(service_name: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(TelemetryError)?;
    info!(service = service_name, "logging initialised");
    Ok(())
}
