//! # lab-db
//!
//! libSQL persistence for ormlab entities.
//!
//! [`LabDb`] owns the embedded database and runs the schema migrations on
//! open. [`service::LabService`] wraps it and hosts every repository method
//! (`repos/*.rs`): create/read/update/delete plus the query helpers and
//! caller operations of each exercise group.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use helpers::map_constraint_error;
use libsql::Builder;
use libsql::params::IntoParams;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection. Foreign keys are
/// enforced on the connection.
pub struct LabDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LabDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lab_db = Self { db, conn };
        lab_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(lab_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Execute a write, mapping UNIQUE violations to field validation errors.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for constraint failures on unique
    /// columns, `DatabaseError::LibSql` otherwise.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, DatabaseError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(map_constraint_error)
    }

    /// Execute an INSERT and return the new row's id.
    ///
    /// # Errors
    ///
    /// Same as [`LabDb::execute`].
    pub async fn insert(&self, sql: &str, params: impl IntoParams) -> Result<i64, DatabaseError> {
        self.execute(sql, params).await?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Number of rows in `table`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count(&self, table: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query(format!("COUNT on {table} returned no row")))?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LabDb {
        LabDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "products",
            "students",
            "pets",
            "artifacts",
            "locations",
            "cars",
            "todos",
            "hotel_rooms",
            "characters",
            "artworks",
            "laptops",
            "owners",
            "vehicles",
            "registrations",
            "animals",
            "zoo_keepers",
            "zoo_keeper_animals",
            "veterinarians",
            "heroes",
            "user_profiles",
            "messages",
            "learners",
            "credit_cards",
            "hotels",
            "rooms",
            "reservations",
            "restaurants",
            "menus",
            "restaurant_reviews",
            "menu_reviews",
            "real_estate_listings",
            "video_games",
            "billing_infos",
            "invoices",
            "technologies",
            "projects",
            "project_technologies",
            "programmers",
            "programmer_projects",
            "tasks",
            "exercises",
            "workers",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn insert_returns_increasing_ids() {
        let db = test_db().await;
        let first = db
            .insert("INSERT INTO owners (name) VALUES (?1)", ["Ivan"])
            .await
            .unwrap();
        let second = db
            .insert("INSERT INTO owners (name) VALUES (?1)", ["Maria"])
            .await
            .unwrap();
        assert!(second > first);
        assert_eq!(db.count("owners").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unique_violation_becomes_validation_error() {
        let db = test_db().await;
        db.insert(
            "INSERT INTO user_profiles (username, email) VALUES (?1, ?2)",
            ["ann", "ann@example.com"],
        )
        .await
        .unwrap();
        let err = db
            .insert(
                "INSERT INTO user_profiles (username, email) VALUES (?1, ?2)",
                ["ann", "other@example.com"],
            )
            .await
            .unwrap_err();
        match err {
            DatabaseError::Validation(errors) => assert!(errors.has_field("username")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn foreign_keys_cascade() {
        let db = test_db().await;
        let owner = db
            .insert("INSERT INTO owners (name) VALUES (?1)", ["Ivan"])
            .await
            .unwrap();
        db.insert(
            "INSERT INTO vehicles (model, year, owner_id) VALUES (?1, ?2, ?3)",
            libsql::params!["Golf", 2010, owner],
        )
        .await
        .unwrap();
        db.execute("DELETE FROM owners WHERE id = ?1", [owner])
            .await
            .unwrap();
        assert_eq!(db.count("vehicles").await.unwrap(), 0);
    }
}
