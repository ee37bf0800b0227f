//! Artifact repository.

use lab_core::entities::{Artifact, NewArtifact};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_bool};
use crate::service::LabService;

const SELECT_COLS: &str = "id, name, origin, age, description, is_magical";

fn row_to_artifact(row: &libsql::Row) -> Result<Artifact, DatabaseError> {
    Ok(Artifact {
        id: row.get(0)?,
        name: row.get(1)?,
        origin: row.get(2)?,
        age: row.get(3)?,
        description: row.get(4)?,
        is_magical: get_bool(row, 5)?,
    })
}

impl LabService {
    pub async fn insert_artifact(&self, new: &NewArtifact) -> Result<Artifact, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO artifacts (name, origin, age, description, is_magical)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.name.as_str(),
                    new.origin.as_str(),
                    new.age,
                    new.description.as_str(),
                    i64::from(new.is_magical)
                ],
            )
            .await?;
        Ok(Artifact {
            id,
            name: new.name.clone(),
            origin: new.origin.clone(),
            age: new.age,
            description: new.description.clone(),
            is_magical: new.is_magical,
        })
    }

    /// Store an artifact and report its age.
    pub async fn create_artifact(&self, new: &NewArtifact) -> Result<String, DatabaseError> {
        self.insert_artifact(new).await?;
        Ok(new.summary())
    }

    pub async fn get_artifact_by_name(&self, name: &str) -> Result<Artifact, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM artifacts WHERE name = ?1 ORDER BY id LIMIT 1"),
                [name],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Artifact", name))?;
        row_to_artifact(&row)
    }

    pub async fn list_artifacts(&self) -> Result<Vec<Artifact>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM artifacts ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_artifact).await
    }

    /// Rename a magical artifact older than 250 years, in place and in storage.
    ///
    /// Returns whether the rename happened.
    pub async fn rename_artifact(
        &self,
        artifact: &mut Artifact,
        new_name: &str,
    ) -> Result<bool, DatabaseError> {
        if !artifact.can_be_renamed() {
            tracing::debug!(id = artifact.id, "artifact not eligible for rename");
            return Ok(false);
        }
        Self::check(&NewArtifact {
            name: new_name.to_string(),
            origin: artifact.origin.clone(),
            age: artifact.age,
            description: artifact.description.clone(),
            is_magical: artifact.is_magical,
        })?;
        self.db()
            .execute(
                "UPDATE artifacts SET name = ?1 WHERE id = ?2",
                libsql::params![new_name, artifact.id],
            )
            .await?;
        artifact.name = new_name.to_string();
        Ok(true)
    }

    pub async fn delete_all_artifacts(&self) -> Result<u64, DatabaseError> {
        let removed = self.db().execute("DELETE FROM artifacts", ()).await?;
        tracing::info!(removed, "artifacts deleted");
        Ok(removed)
    }
}
