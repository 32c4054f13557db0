//! Error types shared by the entity services.

use super::ModelState;
use crate::persistence::RepositoryError;
use thiserror::Error;

/// Message reported with every payload validation failure.
pub const MODEL_STATE_ERROR: &str =
    "Unable to create model. Please see error details for more information";

/// Error returned while parsing a stored enum value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Creates a parse error for the named enum kind.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for entity service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level errors for entity operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("Unable to create model. Please see error details for more information")]
    Validation(ModelState),

    /// The addressed row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name.
        entity: &'static str,
        /// Requested identifier.
        id: i32,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ServiceError {
    /// Builds a not-found error for the given entity.
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // A row removed between lookup and write is reported like a miss.
            RepositoryError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Repository(other),
        }
    }
}

impl From<ModelState> for ServiceError {
    fn from(state: ModelState) -> Self {
        Self::Validation(state)
    }
}
