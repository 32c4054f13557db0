//! Rendering of handler panics as the generic error envelope.

use super::ErrorEnvelope;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use tracing::error;

const UNHANDLED_MESSAGE: &str = "An unhandled exception has occurred";

/// Converts a caught panic payload into a 500 response.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
#[must_use]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|text| (*text).to_owned()));
    error!(detail = detail.as_deref(), "{UNHANDLED_MESSAGE}");
    let envelope = ErrorEnvelope::internal(UNHANDLED_MESSAGE, detail);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
}
