//! Conversion of service failures into HTTP responses.

use crate::common::{MODEL_STATE_ERROR, ModelState, ServiceError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use tracing::error;

/// JSON body written for every failed request that carries a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code.
    pub code: u16,
    /// Human-readable failure summary.
    pub message: String,
    /// Chain of underlying causes, innermost last.
    pub stack_trace: Option<String>,
    /// Field-level validation messages.
    #[serde(default, skip_serializing_if = "ModelState::is_valid")]
    pub errors: ModelState,
}

impl ErrorEnvelope {
    /// Builds an internal-server-error envelope.
    #[must_use]
    pub fn internal(message: impl Into<String>, stack_trace: Option<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
            stack_trace,
            errors: ModelState::new(),
        }
    }
}

/// Request failure as seen by the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// The payload failed validation or could not be parsed.
    Validation(ModelState),
    /// The addressed row does not exist.
    NotFound,
    /// Any other failure.
    Internal(Box<dyn StdError + Send + Sync>),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(state) => Self::Validation(state),
            ServiceError::NotFound { .. } => Self::NotFound,
            other @ ServiceError::Repository(_) => Self::Internal(Box::new(other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            // Validation failures keep the 500 status clients of these APIs
            // already handle.
            Self::Validation(errors) => {
                error!(?errors, "{MODEL_STATE_ERROR}");
                let envelope = ErrorEnvelope {
                    errors,
                    ..ErrorEnvelope::internal(MODEL_STATE_ERROR, None)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
            }
            Self::Internal(err) => {
                let stack_trace = source_chain(err.as_ref());
                error!(error = %err, cause = stack_trace.as_deref(), "request failed");
                let envelope = ErrorEnvelope::internal(err.to_string(), stack_trace);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
            }
        }
    }
}

fn source_chain(err: &(dyn StdError + 'static)) -> Option<String> {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    (!causes.is_empty()).then(|| causes.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ErrorEnvelope};
    use crate::common::{ModelState, ServiceError};
    use crate::persistence::RepositoryError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    async fn envelope_of(err: ApiError) -> (StatusCode, ErrorEnvelope) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();
        let envelope = serde_json::from_slice(&bytes).expect("body should be an envelope");
        (status, envelope)
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn validation_failures_report_model_state_with_500() {
        let mut state = ModelState::new();
        state.add_error("summary", "The summary field is required.");

        let (status, envelope) = envelope_of(ServiceError::Validation(state.clone()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.code, 500);
        assert_eq!(
            envelope.message,
            "Unable to create model. Please see error details for more information"
        );
        assert_eq!(envelope.errors, state);
        assert_eq!(envelope.stack_trace, None);
    }

    #[tokio::test]
    async fn repository_failures_report_generic_500() {
        let err = ServiceError::from(RepositoryError::Duplicate("users_employee_id_key".to_owned()));

        let (status, envelope) = envelope_of(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.message, "duplicate value: users_employee_id_key");
        assert!(envelope.errors.is_valid());
    }

    #[tokio::test]
    async fn repository_not_found_maps_to_404() {
        let err = ServiceError::from(RepositoryError::NotFound {
            entity: "task",
            id: 4,
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
