//! Hero repository. The class-specific traits are one JSON column.

use lab_core::entities::{Hero, HeroKind, NewHero};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

const SELECT_COLS: &str = "id, name, description, traits";

fn row_to_hero(row: &libsql::Row) -> Result<Hero, DatabaseError> {
    let traits: String = row.get(3)?;
    let kind: HeroKind = serde_json::from_str(&traits)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse hero traits: {e}")))?;
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        kind,
    })
}

impl LabService {
    pub async fn create_hero(&self, new: &NewHero) -> Result<Hero, DatabaseError> {
        Self::check(new)?;
        let traits = serde_json::to_string(&new.kind).map_err(|e| DatabaseError::Other(e.into()))?;
        let id = self
            .db()
            .insert(
                "INSERT INTO heroes (name, description, class, traits) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.name.as_str(),
                    new.description.as_str(),
                    new.kind.class_label(),
                    traits
                ],
            )
            .await?;
        tracing::debug!(id, class = new.kind.class_label(), "hero created");
        Ok(Hero {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            kind: new.kind.clone(),
        })
    }

    pub async fn get_hero(&self, id: i64) -> Result<Hero, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM heroes WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Hero", id))?;
        row_to_hero(&row)
    }

    pub async fn list_heroes(&self) -> Result<Vec<Hero>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM heroes ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_hero).await
    }

    /// Heroes of exactly this class (`"TimeMage"`, not its `"Mage"` family).
    pub async fn heroes_by_class(&self, class: &str) -> Result<Vec<Hero>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM heroes WHERE class = ?1 ORDER BY id"),
                [class],
            )
            .await?;
        collect_rows(rows, row_to_hero).await
    }

    /// Heroes whose class belongs to `family`, specialisations included.
    pub async fn heroes_by_family(&self, family: &str) -> Result<Vec<Hero>, DatabaseError> {
        Ok(self
            .list_heroes()
            .await?
            .into_iter()
            .filter(|hero| hero.kind.family() == family)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use lab_core::entities::{MageTraits, NecromancerTraits, TimeMageTraits};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    fn mage() -> MageTraits {
        MageTraits {
            elemental_power: "Fire".into(),
            spellbook_type: "Ancient".into(),
        }
    }

    fn new_hero(name: &str, kind: HeroKind) -> NewHero {
        NewHero {
            name: name.into(),
            description: String::new(),
            kind,
        }
    }

    #[tokio::test]
    async fn specialised_traits_roundtrip() {
        let svc = test_service().await;
        let created = svc
            .create_hero(&new_hero(
                "Chronos",
                HeroKind::TimeMage(TimeMageTraits {
                    mage: mage(),
                    time_magic_mastery: "Expert".into(),
                    temporal_shift_ability: "Rewind".into(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(svc.get_hero(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn class_and_family_filters() {
        let svc = test_service().await;
        svc.create_hero(&new_hero("Merlin", HeroKind::Mage(mage())))
            .await
            .unwrap();
        svc.create_hero(&new_hero(
            "Mortis",
            HeroKind::Necromancer(NecromancerTraits {
                mage: mage(),
                raise_dead_ability: "Army".into(),
            }),
        ))
        .await
        .unwrap();

        assert_eq!(svc.heroes_by_class("Mage").await.unwrap().len(), 1);
        assert_eq!(svc.heroes_by_family("Mage").await.unwrap().len(), 2);
        assert!(svc.heroes_by_family("Assassin").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_trait_rejected() {
        let svc = test_service().await;
        let mut traits = mage();
        traits.elemental_power = "x".repeat(101);
        let err = svc
            .create_hero(&new_hero("Merlin", HeroKind::Mage(traits)))
            .await
            .unwrap_err();
        let DatabaseError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors.has_field("elemental_power"));
    }
}
