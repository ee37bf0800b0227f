use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub difficulty_level: i64,
    pub duration_minutes: i64,
    pub repetitions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewExercise {
    pub name: String,
    pub category: String,
    pub difficulty_level: i64,
    pub duration_minutes: i64,
    pub repetitions: i64,
}

impl Validate for NewExercise {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(rules::max_length("category", &self.category, 50))
            .check(rules::non_negative("difficulty_level", self.difficulty_level))
            .check(rules::non_negative("duration_minutes", self.duration_minutes))
            .check(rules::non_negative("repetitions", self.repetitions))
            .finish()
    }
}
