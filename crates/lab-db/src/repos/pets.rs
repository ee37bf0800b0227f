//! Pet repository.

use lab_core::entities::{NewPet, Pet};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

fn row_to_pet(row: &libsql::Row) -> Result<Pet, DatabaseError> {
    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
    })
}

impl LabService {
    pub async fn insert_pet(&self, new: &NewPet) -> Result<Pet, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO pets (name, species) VALUES (?1, ?2)",
                [new.name.as_str(), new.species.as_str()],
            )
            .await?;
        Ok(Pet {
            id,
            name: new.name.clone(),
            species: new.species.clone(),
        })
    }

    /// Store a pet and describe it.
    pub async fn create_pet(&self, name: &str, species: &str) -> Result<String, DatabaseError> {
        let pet = self
            .insert_pet(&NewPet {
                name: name.to_string(),
                species: species.to_string(),
            })
            .await?;
        Ok(pet.greeting())
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, name, species FROM pets ORDER BY id", ())
            .await?;
        collect_rows(rows, row_to_pet).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::test_service;

    #[tokio::test]
    async fn create_pet_returns_greeting() {
        let svc = test_service().await;
        assert_eq!(
            svc.create_pet("Buddy", "Dog").await.unwrap(),
            "Buddy is a very cute Dog!"
        );
        let pets = svc.list_pets().await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].species, "Dog");
    }

    #[tokio::test]
    async fn overlong_name_rejected() {
        let svc = test_service().await;
        assert!(svc.create_pet(&"x".repeat(41), "Dog").await.is_err());
        assert!(svc.list_pets().await.unwrap().is_empty());
    }
}
