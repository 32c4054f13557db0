//! Project Manager API server.
//!
//! Configuration is read from the environment (and an optional `.env`
//! file); see [`workboard::config`] for the recognised variables.

use std::process::ExitCode;

use tracing::error;
use workboard::config::{PROJECT_MANAGER_DEFAULTS, ServiceConfig};
use workboard::project_manager::{bootstrap, http::router};
use workboard::server::{StartupError, serve};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "project manager API stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    workboard::telemetry::init_tracing(PROJECT_MANAGER_DEFAULTS.service_name)?;
    let config = ServiceConfig::from_env(&PROJECT_MANAGER_DEFAULTS)?;
    config.log_summary();

    let services = bootstrap(&config.database).await?;
    serve(router(services), &config).await
}
