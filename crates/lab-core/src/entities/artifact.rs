use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// Artifacts older than this may be renamed, provided they are magical.
pub const RENAME_MIN_AGE: i64 = 250;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Artifact {
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub age: i64,
    pub description: String,
    pub is_magical: bool,
}

impl Artifact {
    #[must_use]
    pub const fn can_be_renamed(&self) -> bool {
        self.is_magical && self.age > RENAME_MIN_AGE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewArtifact {
    pub name: String,
    pub origin: String,
    pub age: i64,
    pub description: String,
    #[serde(default)]
    pub is_magical: bool,
}

impl NewArtifact {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("The artifact {} is {} years old!", self.name, self.age)
    }
}

impl Validate for NewArtifact {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 70))
            .check(rules::max_length("origin", &self.origin, 70))
            .check(rules::non_negative("age", self.age))
            .finish()
    }
}
