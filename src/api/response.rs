//! Success response helpers.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `201 Created` with a `Location` header and the row as body.
pub fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

/// `200 OK` with the related row, or `204 No Content` when there is none.
pub fn optional<T: Serialize>(related: Option<T>) -> Response {
    related.map_or_else(
        || StatusCode::NO_CONTENT.into_response(),
        |row| Json(row).into_response(),
    )
}
