//! Character repository: class-wide updates, fusion and stat grants.

use lab_core::entities::{Character, EMPTY_INVENTORY, NewCharacter, fuse};
use lab_core::enums::CharacterClass;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, finish_transaction, map_constraint_error, parse_enum};
use crate::service::LabService;
use crate::updates::SetClauses;
use crate::updates::character::CharacterUpdate;

const SELECT_COLS: &str =
    "id, name, class_name, level, strength, dexterity, intelligence, hit_points, inventory";

const INSERT_SQL: &str = "INSERT INTO characters
     (name, class_name, level, strength, dexterity, intelligence, hit_points, inventory)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

fn insert_params(new: &NewCharacter) -> Vec<libsql::Value> {
    vec![
        new.name.clone().into(),
        new.class_name.as_str().into(),
        new.level.into(),
        new.strength.into(),
        new.dexterity.into(),
        new.intelligence.into(),
        new.hit_points.into(),
        new.inventory
            .clone()
            .map_or(libsql::Value::Null, Into::into),
    ]
}

fn row_to_character(row: &libsql::Row) -> Result<Character, DatabaseError> {
    Ok(Character {
        id: row.get(0)?,
        name: row.get(1)?,
        class_name: parse_enum(&row.get::<String>(2)?)?,
        level: row.get(3)?,
        strength: row.get(4)?,
        dexterity: row.get(5)?,
        intelligence: row.get(6)?,
        hit_points: row.get(7)?,
        inventory: row.get::<Option<String>>(8)?,
    })
}

fn with_id(id: i64, new: NewCharacter) -> Character {
    Character {
        id,
        name: new.name,
        class_name: new.class_name,
        level: new.level,
        strength: new.strength,
        dexterity: new.dexterity,
        intelligence: new.intelligence,
        hit_points: new.hit_points,
        inventory: new.inventory,
    }
}

impl LabService {
    pub async fn create_character(&self, new: &NewCharacter) -> Result<Character, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(INSERT_SQL, libsql::params_from_iter(insert_params(new)))
            .await?;
        Ok(with_id(id, new.clone()))
    }

    pub async fn get_character(&self, id: i64) -> Result<Character, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM characters WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Character", id))?;
        row_to_character(&row)
    }

    pub async fn list_characters(&self) -> Result<Vec<Character>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM characters ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_character).await
    }

    /// Apply a partial update after validating the merged character.
    pub async fn update_character(
        &self,
        id: i64,
        update: CharacterUpdate,
    ) -> Result<Character, DatabaseError> {
        let current = self.get_character(id).await?;
        Self::check(&NewCharacter {
            name: update.name.clone().unwrap_or(current.name),
            class_name: update.class_name.unwrap_or(current.class_name),
            level: update.level.unwrap_or(current.level),
            strength: update.strength.unwrap_or(current.strength),
            dexterity: update.dexterity.unwrap_or(current.dexterity),
            intelligence: update.intelligence.unwrap_or(current.intelligence),
            hit_points: update.hit_points.unwrap_or(current.hit_points),
            inventory: update.inventory.clone().unwrap_or(current.inventory),
        })?;

        let mut sets = SetClauses::default();
        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(class_name) = update.class_name {
            sets.push("class_name", class_name.as_str());
        }
        let stats = [
            ("level", update.level),
            ("strength", update.strength),
            ("dexterity", update.dexterity),
            ("intelligence", update.intelligence),
            ("hit_points", update.hit_points),
        ];
        for (column, value) in stats {
            if let Some(value) = value {
                sets.push(column, value);
            }
        }
        if let Some(inventory) = update.inventory {
            sets.push("inventory", inventory.map_or(libsql::Value::Null, Into::into));
        }
        if sets.is_empty() {
            return self.get_character(id).await;
        }

        let (sql, params) = sets.into_update("characters", id);
        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_character(id).await
    }

    /// One statement adjusting every class at once:
    /// mages gain 3 levels and lose 7 intelligence, warriors lose half their
    /// hit points and gain 4 dexterity, assassins and scouts lose their inventory.
    pub async fn update_characters(&self) -> Result<u64, DatabaseError> {
        self.db()
            .execute(
                "UPDATE characters SET
                   level = CASE WHEN class_name = ?1 THEN level + 3 ELSE level END,
                   intelligence = CASE WHEN class_name = ?1 THEN intelligence - 7 ELSE intelligence END,
                   hit_points = CASE WHEN class_name = ?2 THEN hit_points / 2 ELSE hit_points END,
                   dexterity = CASE WHEN class_name = ?2 THEN dexterity + 4 ELSE dexterity END,
                   inventory = CASE WHEN class_name IN (?3, ?4) THEN ?5 ELSE inventory END",
                libsql::params![
                    CharacterClass::Mage.as_str(),
                    CharacterClass::Warrior.as_str(),
                    CharacterClass::Assassin.as_str(),
                    CharacterClass::Scout.as_str(),
                    EMPTY_INVENTORY
                ],
            )
            .await
    }

    /// Create the fusion of two characters and delete both originals, atomically.
    pub async fn fuse_characters(
        &self,
        first: &Character,
        second: &Character,
    ) -> Result<Character, DatabaseError> {
        let fused = fuse(first, second);
        Self::check(&fused)?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute(INSERT_SQL, libsql::params_from_iter(insert_params(&fused)))
                .await
                .map_err(map_constraint_error)?;
            let id = tx.last_insert_rowid();
            tx.execute(
                "DELETE FROM characters WHERE id IN (?1, ?2)",
                libsql::params![first.id, second.id],
            )
            .await?;
            Ok::<_, DatabaseError>(id)
        }
        .await;
        let id = finish_transaction(tx, result).await?;
        tracing::info!(id, first = first.id, second = second.id, "characters fused");
        Ok(with_id(id, fused))
    }

    async fn grant_stat(&self, column: &str, value: i64) -> Result<u64, DatabaseError> {
        self.db()
            .execute(&format!("UPDATE characters SET {column} = ?1"), [value])
            .await
    }

    pub async fn grand_dexterity(&self) -> Result<u64, DatabaseError> {
        self.grant_stat("dexterity", 30).await
    }

    pub async fn grand_intelligence(&self) -> Result<u64, DatabaseError> {
        self.grant_stat("intelligence", 40).await
    }

    pub async fn grand_strength(&self) -> Result<u64, DatabaseError> {
        self.grant_stat("strength", 50).await
    }

    /// Delete every character whose inventory was emptied.
    pub async fn delete_characters(&self) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .execute("DELETE FROM characters WHERE inventory = ?1", [EMPTY_INVENTORY])
            .await?;
        tracing::info!(removed, "characters with empty inventory deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;
    use crate::updates::character::CharacterUpdateBuilder;

    fn hero(name: &str, class_name: CharacterClass) -> NewCharacter {
        NewCharacter {
            name: name.into(),
            class_name,
            level: 10,
            strength: 15,
            dexterity: 20,
            intelligence: 25,
            hit_points: 100,
            inventory: Some("Sword".into()),
        }
    }

    #[tokio::test]
    async fn class_wide_update() {
        let svc = test_service().await;
        let mage = svc.create_character(&hero("Gandalf", CharacterClass::Mage)).await.unwrap();
        let warrior = svc.create_character(&hero("Conan", CharacterClass::Warrior)).await.unwrap();
        let scout = svc.create_character(&hero("Legolas", CharacterClass::Scout)).await.unwrap();
        assert_eq!(svc.update_characters().await.unwrap(), 3);

        let mage = svc.get_character(mage.id).await.unwrap();
        assert_eq!((mage.level, mage.intelligence), (13, 18));
        let warrior = svc.get_character(warrior.id).await.unwrap();
        assert_eq!((warrior.hit_points, warrior.dexterity), (50, 24));
        assert_eq!(warrior.inventory.as_deref(), Some("Sword"));
        let scout = svc.get_character(scout.id).await.unwrap();
        assert_eq!(scout.inventory.as_deref(), Some(EMPTY_INVENTORY));

        assert_eq!(svc.delete_characters().await.unwrap(), 1);
        assert_eq!(svc.list_characters().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn fusion_replaces_both_characters() {
        let svc = test_service().await;
        let a = svc.create_character(&hero("Gandalf", CharacterClass::Mage)).await.unwrap();
        let b = svc.create_character(&hero("Conan", CharacterClass::Warrior)).await.unwrap();

        let fused = svc.fuse_characters(&a, &b).await.unwrap();
        assert_eq!(fused.name, "Gandalf Conan");
        assert_eq!(fused.class_name, CharacterClass::Fusion);
        assert_eq!(fused.strength, 36);
        assert_eq!(fused.dexterity, 56);
        assert_eq!(fused.intelligence, 75);
        assert_eq!(
            fused.inventory.as_deref(),
            Some("Bow of the Elven Lords, Amulet of Eternal Wisdom")
        );

        let all = svc.list_characters().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], fused);
    }

    #[tokio::test]
    async fn grants_overwrite_stats() {
        let svc = test_service().await;
        svc.create_character(&hero("A", CharacterClass::Assassin)).await.unwrap();
        svc.grand_dexterity().await.unwrap();
        svc.grand_intelligence().await.unwrap();
        svc.grand_strength().await.unwrap();
        let c = &svc.list_characters().await.unwrap()[0];
        assert_eq!((c.dexterity, c.intelligence, c.strength), (30, 40, 50));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let svc = test_service().await;
        let c = svc.create_character(&hero("Aria", CharacterClass::Scout)).await.unwrap();
        let update = CharacterUpdateBuilder::new().level(11).inventory(None).build();
        let updated = svc.update_character(c.id, update).await.unwrap();
        assert_eq!(updated.level, 11);
        assert_eq!(updated.inventory, None);
        assert_eq!(updated.strength, 15);

        let update = CharacterUpdateBuilder::new().hit_points(-1).build();
        assert!(matches!(
            svc.update_character(c.id, update).await,
            Err(DatabaseError::Validation(_))
        ));
    }
}
