use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// A populated place. Listed newest first (`id DESC`) by default.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub population: i64,
    pub description: String,
    pub is_capital: bool,
}

impl Location {
    #[must_use]
    pub fn population_line(&self) -> String {
        format!("\n{} has a population of {}!", self.name, self.population)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewLocation {
    pub name: String,
    pub region: String,
    pub population: i64,
    pub description: String,
    #[serde(default)]
    pub is_capital: bool,
}

impl Validate for NewLocation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(rules::max_length("region", &self.region, 100))
            .check(rules::non_negative("population", self.population))
            .finish()
    }
}
