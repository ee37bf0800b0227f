use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
}

impl Pet {
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("{} is a very cute {}!", self.name, self.species)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
}

impl Validate for NewPet {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 40))
            .check(rules::max_length("species", &self.species, 40))
            .finish()
    }
}
