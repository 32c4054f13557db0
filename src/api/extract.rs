//! Request extractors that report failures through [`ApiError`].

use super::ApiError;
use crate::common::ModelState;
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON request body whose parse failures surface as validation errors.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let mut model_state = ModelState::new();
                model_state.add_error("body", rejection.body_text());
                Err(ApiError::Validation(model_state))
            }
        }
    }
}

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer cannot address any row, so it is
/// rejected as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

impl EntityId {
    /// Converts into a typed identifier.
    #[must_use]
    pub fn into_id<I: From<i32>>(self) -> I {
        I::from(self.0)
    }
}

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        raw.trim().parse().map(Self).map_err(|_| ApiError::NotFound)
    }
}
