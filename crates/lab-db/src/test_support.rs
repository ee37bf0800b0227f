//! Shared test utilities for lab-db tests.

use crate::LabDb;
use crate::service::LabService;

/// Create an in-memory `LabService` with a fresh schema.
pub async fn test_service() -> LabService {
    let db = LabDb::open_local(":memory:").await.unwrap();
    LabService::from_db(db)
}
