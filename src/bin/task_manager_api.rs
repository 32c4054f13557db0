//! Task Manager API server.
//!
//! Configuration is read from the environment (and an optional `.env`
//! file); see [`workboard::config`] for the recognised variables.

use std::process::ExitCode;

use tracing::error;
use workboard::config::{ServiceConfig, TASK_MANAGER_DEFAULTS};
use workboard::server::{StartupError, serve};
use workboard::task_manager::{bootstrap, http::router};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "task manager API stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    workboard::telemetry::init_tracing(TASK_MANAGER_DEFAULTS.service_name)?;
    let config = ServiceConfig::from_env(&TASK_MANAGER_DEFAULTS)?;
    config.log_summary();

    let service = bootstrap(&config.database).await?;
    serve(router(service), &config).await
}
