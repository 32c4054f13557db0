//! Repository error taxonomy.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::{Arc, PoisonError};
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The addressed row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name.
        entity: &'static str,
        /// Requested identifier.
        id: i32,
    },

    /// A reference points at a row that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// A unique column already holds the value.
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Reports a poisoned in-memory lock.
    pub(crate) fn poisoned<T>(err: &PoisonError<T>) -> Self {
        Self::persistence(std::io::Error::other(err.to_string()))
    }

    /// Classifies a Diesel error, keeping constraint names for diagnostics.
    pub(crate) fn from_diesel(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
                Self::ForeignKey(
                    info.constraint_name()
                        .map_or_else(|| info.message().to_owned(), str::to_owned),
                )
            }
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
                Self::Duplicate(
                    info.constraint_name()
                        .map_or_else(|| info.message().to_owned(), str::to_owned),
                )
            }
            other => Self::persistence(other),
        }
    }
}
