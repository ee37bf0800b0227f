//! Character update builder.

use lab_core::enums::CharacterClass;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CharacterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<CharacterClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Option<String>>,
}

pub struct CharacterUpdateBuilder(CharacterUpdate);

impl CharacterUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CharacterUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn class_name(mut self, class_name: CharacterClass) -> Self {
        self.0.class_name = Some(class_name);
        self
    }

    #[must_use]
    pub const fn level(mut self, level: i64) -> Self {
        self.0.level = Some(level);
        self
    }

    #[must_use]
    pub const fn strength(mut self, strength: i64) -> Self {
        self.0.strength = Some(strength);
        self
    }

    #[must_use]
    pub const fn dexterity(mut self, dexterity: i64) -> Self {
        self.0.dexterity = Some(dexterity);
        self
    }

    #[must_use]
    pub const fn intelligence(mut self, intelligence: i64) -> Self {
        self.0.intelligence = Some(intelligence);
        self
    }

    #[must_use]
    pub const fn hit_points(mut self, hit_points: i64) -> Self {
        self.0.hit_points = Some(hit_points);
        self
    }

    #[must_use]
    pub fn inventory(mut self, inventory: Option<String>) -> Self {
        self.0.inventory = Some(inventory);
        self
    }

    #[must_use]
    pub fn build(self) -> CharacterUpdate {
        self.0
    }
}

impl Default for CharacterUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
