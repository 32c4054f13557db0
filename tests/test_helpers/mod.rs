//! Shared helpers for the API integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use workboard::config::{DatabaseConfig, DatabaseKind};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that applies scoped environment variable updates.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets (or removes, for `None`) each variable for the guard lifetime.
    pub fn set_many(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((OsString::from(key), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Database settings selecting the in-memory store.
pub fn in_memory_database(name: &str) -> DatabaseConfig {
    DatabaseConfig {
        kind: DatabaseKind::InMemory,
        connection_string: String::new(),
        name: name.to_owned(),
        pool_size: 1,
    }
}

/// Builds a request with an optional JSON body.
pub fn request(method: &str, uri: &str, body: Option<&Value>) -> eyre::Result<Request<Body>> {
    let builder = Request::builder().method(method).uri(uri);
    let built = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    Ok(built)
}

/// Sends one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> eyre::Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

/// Collects a response body as JSON.
pub async fn body_json(response: Response) -> eyre::Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}
