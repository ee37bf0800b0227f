use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// University student keyed by a short registry code (e.g. `FC5204`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

impl Student {
    /// One line of the registry report, prefixed with a newline.
    #[must_use]
    pub fn info_line(&self) -> String {
        format!(
            "\nStudent №{}: {} {}; Email: {}",
            self.student_id, self.first_name, self.last_name, self.email
        )
    }

    /// The email address moved to another domain, keeping the local part.
    #[must_use]
    pub fn email_with_domain(&self, domain: &str) -> String {
        let local = self.email.split('@').next().unwrap_or_default();
        format!("{local}@{domain}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

impl Validate for NewStudent {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("student_id", &self.student_id))
            .check(rules::max_length("student_id", &self.student_id, 10))
            .check(rules::max_length("first_name", &self.first_name, 50))
            .check(rules::max_length("last_name", &self.last_name, 50))
            .check(rules::email_like("email", &self.email))
            .finish()
    }
}
