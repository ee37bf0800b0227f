//! Location repository. Default ordering is newest first (`id DESC`), so
//! "first" means the most recently inserted row.

use lab_core::entities::{Location, NewLocation};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_bool};
use crate::service::LabService;

const SELECT_COLS: &str = "id, name, region, population, description, is_capital";

fn row_to_location(row: &libsql::Row) -> Result<Location, DatabaseError> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        region: row.get(2)?,
        population: row.get(3)?,
        description: row.get(4)?,
        is_capital: get_bool(row, 5)?,
    })
}

impl LabService {
    pub async fn create_location(&self, new: &NewLocation) -> Result<Location, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO locations (name, region, population, description, is_capital)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.name.as_str(),
                    new.region.as_str(),
                    new.population,
                    new.description.as_str(),
                    i64::from(new.is_capital)
                ],
            )
            .await?;
        Ok(Location {
            id,
            name: new.name.clone(),
            region: new.region.clone(),
            population: new.population,
            description: new.description.clone(),
            is_capital: new.is_capital,
        })
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM locations ORDER BY id DESC"), ())
            .await?;
        collect_rows(rows, row_to_location).await
    }

    async fn first_location(&self) -> Result<Option<Location>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM locations ORDER BY id DESC LIMIT 1"),
                (),
            )
            .await?;
        rows.next().await?.map(|row| row_to_location(&row)).transpose()
    }

    pub async fn show_all_locations(&self) -> Result<String, DatabaseError> {
        Ok(self
            .list_locations()
            .await?
            .iter()
            .map(Location::population_line)
            .collect())
    }

    /// Mark the first location as a capital. `None` when there are no locations.
    pub async fn new_capital(&self) -> Result<Option<Location>, DatabaseError> {
        let Some(mut location) = self.first_location().await? else {
            tracing::warn!("no location to promote to capital");
            return Ok(None);
        };
        self.db()
            .execute("UPDATE locations SET is_capital = 1 WHERE id = ?1", [location.id])
            .await?;
        location.is_capital = true;
        Ok(Some(location))
    }

    /// Names of every capital, in default order.
    pub async fn get_capitals(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT name FROM locations WHERE is_capital = 1 ORDER BY id DESC",
                (),
            )
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>(0)?);
        }
        Ok(names)
    }

    /// Delete the first location. Returns whether a row was removed.
    pub async fn delete_first_location(&self) -> Result<bool, DatabaseError> {
        let Some(location) = self.first_location().await? else {
            tracing::warn!("no location to delete");
            return Ok(false);
        };
        self.db()
            .execute("DELETE FROM locations WHERE id = ?1", [location.id])
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    fn city(name: &str, population: i64) -> NewLocation {
        NewLocation {
            name: name.into(),
            region: "Region".into(),
            population,
            description: String::new(),
            is_capital: false,
        }
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let svc = test_service().await;
        svc.create_location(&city("Sofia", 1_329_000)).await.unwrap();
        svc.create_location(&city("Plovdiv", 346_893)).await.unwrap();
        assert_eq!(
            svc.show_all_locations().await.unwrap(),
            "\nPlovdiv has a population of 346893!\nSofia has a population of 1329000!"
        );
    }

    #[tokio::test]
    async fn capital_and_delete_follow_default_ordering() {
        let svc = test_service().await;
        svc.create_location(&city("Sofia", 1)).await.unwrap();
        svc.create_location(&city("Varna", 2)).await.unwrap();

        let capital = svc.new_capital().await.unwrap().unwrap();
        assert_eq!(capital.name, "Varna");
        assert_eq!(svc.get_capitals().await.unwrap(), vec!["Varna"]);

        assert!(svc.delete_first_location().await.unwrap());
        let remaining = svc.list_locations().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Sofia");
    }

    #[tokio::test]
    async fn empty_table_is_a_no_op() {
        let svc = test_service().await;
        assert!(svc.new_capital().await.unwrap().is_none());
        assert!(!svc.delete_first_location().await.unwrap());
    }

    #[tokio::test]
    async fn negative_population_rejected() {
        let svc = test_service().await;
        let err = svc.create_location(&city("Nowhere", -1)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }
}
