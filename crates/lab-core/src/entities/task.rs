use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// A planner task with a priority and a planned completion date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub is_completed: bool,
    pub creation_date: NaiveDate,
    pub completion_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
    pub creation_date: NaiveDate,
    pub completion_date: NaiveDate,
}

impl Validate for NewTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("title", &self.title))
            .check(rules::max_length("title", &self.title, 200))
            .finish()
    }
}
