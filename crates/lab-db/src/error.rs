//! Database error types for lab-db.

use lab_core::errors::CoreError;
use lab_core::validation::{FieldError, ValidationErrors};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The payload failed validation; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Lookup by key found no row.
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// A business rule refused the write (e.g. an overlapping reservation).
    #[error("{0}")]
    Conflict(String),

    /// A SQL query failed or returned unreadable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: &str, key: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }
}

impl From<FieldError> for DatabaseError {
    fn from(error: FieldError) -> Self {
        Self::Validation(error.into())
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(errors) => Self::Validation(errors),
            CoreError::Field(field) => field.into(),
            CoreError::NotFound { entity, key } => Self::NotFound { entity, key },
        }
    }
}
