//! Cross-cutting error types for ormlab.
//!
//! Storage errors (`DatabaseError`) live in `lab-db`; this module only holds the
//! errors that pure entity code can raise.

use thiserror::Error;

use crate::validation::{FieldError, ValidationErrors};

/// Errors that can be raised without touching storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// One or more fields violated their declared rules.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A custom field rejected its raw input at assignment time.
    #[error("Invalid field value: {0}")]
    Field(#[from] FieldError),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: String, key: String },
}
