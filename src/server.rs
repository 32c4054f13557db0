//! HTTP server bootstrap shared by both API binaries.

use crate::api::handle_panic;
use crate::config::{ConfigError, ServiceConfig};
use crate::persistence::RepositoryError;
use crate::telemetry::TelemetryError;
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Errors that stop a service before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Logging could not be initialised.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The store could not be opened.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Binding or serving failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wraps entity routes with panic recovery, CORS and request tracing.
#[must_use]
pub fn with_http_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serves the router until Ctrl-C.
///
/// Listens with TLS on the HTTPS port when the certificate and key exist,
/// otherwise with plain HTTP on the HTTP port.
///
/// # Errors
///
/// Returns [`StartupError::Io`] when the listener cannot be bound, the TLS
/// material cannot be loaded, or the server fails.
pub async fn serve(router: Router, config: &ServiceConfig) -> Result<(), StartupError> {
    let app = with_http_layers(router);

    if config.tls_available() {
        let tls = RustlsConfig::from_pem_file(&config.cert_path, &config.key_path).await?;
        let addr = SocketAddr::from(([0, 0, 0, 0], config.https_port));
        let handle = Handle::new();
        tokio::spawn(shutdown_on_signal(handle.clone()));
        info!(%addr, cert = %config.cert_path.display(), "HTTPS server listening");
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .inspect_err(|err| error!(%addr, error = %err, "HTTPS server failed"))?;
    } else {
        warn!(cert = %config.cert_path.display(), "TLS certificate not found, serving plain HTTP");
        let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .inspect_err(|err| error!(%addr, error = %err, "failed to bind"))?;
        info!(%addr, "HTTP server listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_on_signal(handle: Handle) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
