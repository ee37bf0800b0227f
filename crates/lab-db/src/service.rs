//! Service layer hosting every repository method.
//!
//! `LabService` wraps `LabDb`; each `repos/*.rs` module adds an
//! `impl LabService` block. Mutating methods validate their payload first
//! and return `DatabaseError::Validation` before any SQL runs.

use lab_core::validation::Validate;

use crate::LabDb;
use crate::error::DatabaseError;

pub struct LabService {
    db: LabDb,
}

impl LabService {
    /// Open (or create) the database at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LabDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LabDb` (for testing).
    #[must_use]
    pub const fn from_db(db: LabDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LabDb {
        &self.db
    }

    /// Run `payload.validate()` and lift its errors into `DatabaseError`.
    pub(crate) fn check<T: Validate>(payload: &T) -> Result<(), DatabaseError> {
        payload.validate().map_err(DatabaseError::Validation)
    }
}
