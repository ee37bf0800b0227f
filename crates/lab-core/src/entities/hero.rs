//! Heroes of three families, each with two specialisations.
//!
//! The family fields live in `MageTraits` / `AssassinTraits` /
//! `DemonHunterTraits`; specialisations embed their family's traits and add
//! their own. The whole [`HeroKind`] is stored as one JSON column next to a
//! `class` label so rows can be filtered by class without decoding.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

const TRAIT_MAX: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MageTraits {
    pub elemental_power: String,
    pub spellbook_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssassinTraits {
    pub weapon_type: String,
    pub assassination_technique: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DemonHunterTraits {
    pub weapon_type: String,
    pub demon_slaying_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeMageTraits {
    #[serde(flatten)]
    pub mage: MageTraits,
    pub time_magic_mastery: String,
    pub temporal_shift_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NecromancerTraits {
    #[serde(flatten)]
    pub mage: MageTraits,
    pub raise_dead_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ViperAssassinTraits {
    #[serde(flatten)]
    pub assassin: AssassinTraits,
    pub venomous_strikes_mastery: String,
    pub venomous_bite_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShadowbladeAssassinTraits {
    #[serde(flatten)]
    pub assassin: AssassinTraits,
    pub shadowstep_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VengeanceDemonHunterTraits {
    #[serde(flatten)]
    pub demon_hunter: DemonHunterTraits,
    pub vengeance_mastery: String,
    pub retribution_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FelbladeDemonHunterTraits {
    #[serde(flatten)]
    pub demon_hunter: DemonHunterTraits,
    pub felblade_ability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "class")]
pub enum HeroKind {
    Mage(MageTraits),
    TimeMage(TimeMageTraits),
    Necromancer(NecromancerTraits),
    Assassin(AssassinTraits),
    ViperAssassin(ViperAssassinTraits),
    ShadowbladeAssassin(ShadowbladeAssassinTraits),
    DemonHunter(DemonHunterTraits),
    VengeanceDemonHunter(VengeanceDemonHunterTraits),
    FelbladeDemonHunter(FelbladeDemonHunterTraits),
}

impl HeroKind {
    /// Label stored in the `class` column.
    #[must_use]
    pub const fn class_label(&self) -> &'static str {
        match self {
            Self::Mage(_) => "Mage",
            Self::TimeMage(_) => "TimeMage",
            Self::Necromancer(_) => "Necromancer",
            Self::Assassin(_) => "Assassin",
            Self::ViperAssassin(_) => "ViperAssassin",
            Self::ShadowbladeAssassin(_) => "ShadowbladeAssassin",
            Self::DemonHunter(_) => "DemonHunter",
            Self::VengeanceDemonHunter(_) => "VengeanceDemonHunter",
            Self::FelbladeDemonHunter(_) => "FelbladeDemonHunter",
        }
    }

    /// Base family the class belongs to.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        match self {
            Self::Mage(_) | Self::TimeMage(_) | Self::Necromancer(_) => "Mage",
            Self::Assassin(_) | Self::ViperAssassin(_) | Self::ShadowbladeAssassin(_) => {
                "Assassin"
            }
            Self::DemonHunter(_)
            | Self::VengeanceDemonHunter(_)
            | Self::FelbladeDemonHunter(_) => "DemonHunter",
        }
    }

    /// Every trait as `(field, value)`, family fields first.
    #[must_use]
    pub fn traits(&self) -> Vec<(&'static str, &str)> {
        fn mage(t: &MageTraits) -> Vec<(&'static str, &str)> {
            vec![
                ("elemental_power", t.elemental_power.as_str()),
                ("spellbook_type", t.spellbook_type.as_str()),
            ]
        }
        fn assassin(t: &AssassinTraits) -> Vec<(&'static str, &str)> {
            vec![
                ("weapon_type", t.weapon_type.as_str()),
                ("assassination_technique", t.assassination_technique.as_str()),
            ]
        }
        fn demon_hunter(t: &DemonHunterTraits) -> Vec<(&'static str, &str)> {
            vec![
                ("weapon_type", t.weapon_type.as_str()),
                ("demon_slaying_ability", t.demon_slaying_ability.as_str()),
            ]
        }

        match self {
            Self::Mage(t) => mage(t),
            Self::TimeMage(t) => {
                let mut out = mage(&t.mage);
                out.push(("time_magic_mastery", &t.time_magic_mastery));
                out.push(("temporal_shift_ability", &t.temporal_shift_ability));
                out
            }
            Self::Necromancer(t) => {
                let mut out = mage(&t.mage);
                out.push(("raise_dead_ability", &t.raise_dead_ability));
                out
            }
            Self::Assassin(t) => assassin(t),
            Self::ViperAssassin(t) => {
                let mut out = assassin(&t.assassin);
                out.push(("venomous_strikes_mastery", &t.venomous_strikes_mastery));
                out.push(("venomous_bite_ability", &t.venomous_bite_ability));
                out
            }
            Self::ShadowbladeAssassin(t) => {
                let mut out = assassin(&t.assassin);
                out.push(("shadowstep_ability", &t.shadowstep_ability));
                out
            }
            Self::DemonHunter(t) => demon_hunter(t),
            Self::VengeanceDemonHunter(t) => {
                let mut out = demon_hunter(&t.demon_hunter);
                out.push(("vengeance_mastery", &t.vengeance_mastery));
                out.push(("retribution_ability", &t.retribution_ability));
                out
            }
            Self::FelbladeDemonHunter(t) => {
                let mut out = demon_hunter(&t.demon_hunter);
                out.push(("felblade_ability", &t.felblade_ability));
                out
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub kind: HeroKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub description: String,
    pub kind: HeroKind,
}

impl Validate for NewHero {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, TRAIT_MAX));
        for (field, value) in self.kind.traits() {
            v.check(rules::max_length(field, value, TRAIT_MAX));
        }
        v.finish()
    }
}
