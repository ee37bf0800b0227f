use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CharacterClass;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// Inventory written by the class-wide update for assassins and scouts.
pub const EMPTY_INVENTORY: &str = "The inventory is empty";

const RANGED_INVENTORY: &str = "Bow of the Elven Lords, Amulet of Eternal Wisdom";
const MELEE_INVENTORY: &str = "Dragon Scale Armor, Excalibur";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub class_name: CharacterClass,
    pub level: i64,
    pub strength: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub hit_points: i64,
    pub inventory: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub class_name: CharacterClass,
    pub level: i64,
    pub strength: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub hit_points: i64,
    #[serde(default)]
    pub inventory: Option<String>,
}

impl Validate for NewCharacter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(rules::non_negative("level", self.level))
            .check(rules::non_negative("strength", self.strength))
            .check(rules::non_negative("dexterity", self.dexterity))
            .check(rules::non_negative("intelligence", self.intelligence))
            .check(rules::non_negative("hit_points", self.hit_points))
            .finish()
    }
}

/// Combine two characters into a new `Fusion` character.
///
/// Stats are summed and scaled (strength ×1.2, dexterity ×1.4, intelligence
/// ×1.5) in exact integer arithmetic, flooring the result. A 45 dexterity sum
/// gives 63, with no float error pulling it down to 62. Level is the floored mean. The inventory is
/// picked from the first character's class.
#[must_use]
pub fn fuse(first: &Character, second: &Character) -> NewCharacter {
    let inventory = match first.class_name {
        CharacterClass::Mage | CharacterClass::Scout => Some(RANGED_INVENTORY.to_string()),
        CharacterClass::Warrior | CharacterClass::Assassin => Some(MELEE_INVENTORY.to_string()),
        CharacterClass::Fusion => None,
    };

    NewCharacter {
        name: format!("{} {}", first.name, second.name),
        class_name: CharacterClass::Fusion,
        level: (first.level + second.level) / 2,
        strength: (first.strength + second.strength) * 12 / 10,
        dexterity: (first.dexterity + second.dexterity) * 14 / 10,
        intelligence: (first.intelligence + second.intelligence) * 15 / 10,
        hit_points: first.hit_points + second.hit_points,
        inventory,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn character(name: &str, class_name: CharacterClass) -> Character {
        Character {
            id: 1,
            name: name.into(),
            class_name,
            level: 5,
            strength: 11,
            dexterity: 7,
            intelligence: 9,
            hit_points: 100,
            inventory: None,
        }
    }

    #[test]
    fn fuse_scales_stats() {
        let mut second = character("Gimli", CharacterClass::Warrior);
        second.level = 8;
        let fused = fuse(&character("Gandalf", CharacterClass::Mage), &second);

        assert_eq!(fused.name, "Gandalf Gimli");
        assert_eq!(fused.class_name, CharacterClass::Fusion);
        assert_eq!(fused.level, 6);
        assert_eq!(fused.strength, 26); // 22 * 1.2 = 26.4
        assert_eq!(fused.dexterity, 19); // 14 * 1.4 = 19.6
        assert_eq!(fused.intelligence, 27); // 18 * 1.5
        assert_eq!(fused.hit_points, 200);
        assert_eq!(fused.inventory.as_deref(), Some(RANGED_INVENTORY));
    }

    #[test]
    fn fuse_inventory_follows_first_class() {
        let a = character("A", CharacterClass::Assassin);
        let b = character("B", CharacterClass::Mage);
        assert_eq!(fuse(&a, &b).inventory.as_deref(), Some(MELEE_INVENTORY));
        assert_eq!(fuse(&b, &a).inventory.as_deref(), Some(RANGED_INVENTORY));
    }

    #[test]
    fn fuse_scaling_is_exact() {
        let mut first = character("A", CharacterClass::Scout);
        let mut second = character("B", CharacterClass::Scout);
        first.dexterity = 20;
        second.dexterity = 25;
        first.strength = 5;
        second.strength = 0;
        let fused = fuse(&first, &second);
        assert_eq!(fused.dexterity, 63);
        assert_eq!(fused.strength, 6);
    }
}
