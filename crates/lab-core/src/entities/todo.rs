use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub is_finished: bool,
}

impl Todo {
    #[must_use]
    pub fn reminder_line(&self) -> String {
        format!(
            "\nTask - {} needs to be done until {}!",
            self.title, self.due_date
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_finished: bool,
}

impl Validate for NewTodo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("title", &self.title))
            .check(rules::max_length("title", &self.title, 25))
            .finish()
    }
}

/// Shift every character code down by 3 (`"Zdvk#wkh#glvkhv$"` → `"Wash the dishes!"`).
///
/// Characters whose code would drop below zero are kept unchanged.
#[must_use]
pub fn decode_shifted(text: &str) -> String {
    text.chars()
        .map(|c| {
            u32::from(c)
                .checked_sub(3)
                .and_then(char::from_u32)
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sample_text() {
        assert_eq!(decode_shifted("Zdvk#wkh#glvkhv$"), "Wash the dishes!");
    }

    #[test]
    fn reminder_uses_iso_date() {
        let todo = Todo {
            id: 1,
            title: "Sample Task".into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2023, 10, 31).unwrap(),
            is_finished: false,
        };
        assert_eq!(
            todo.reminder_line(),
            "\nTask - Sample Task needs to be done until 2023-10-31!"
        );
    }
}
