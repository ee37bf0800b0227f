use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

pub const DEFAULT_FIRST_NAME: &str = "Mitko";
pub const DEFAULT_LAST_NAME: &str = "Mitkov";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Worker {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i64>,
    pub salary: Option<i64>,
}

/// Missing names fall back to the column defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewWorker {
    #[serde(default = "default_first_name")]
    pub first_name: String,
    #[serde(default = "default_last_name")]
    pub last_name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub salary: Option<i64>,
}

fn default_first_name() -> String {
    DEFAULT_FIRST_NAME.to_string()
}

fn default_last_name() -> String {
    DEFAULT_LAST_NAME.to_string()
}

impl Default for NewWorker {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            last_name: default_last_name(),
            age: None,
            salary: None,
        }
    }
}

impl Validate for NewWorker {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::max_length("first_name", &self.first_name, 30))
            .check(rules::max_length("last_name", &self.last_name, 30))
            .finish()
    }
}
