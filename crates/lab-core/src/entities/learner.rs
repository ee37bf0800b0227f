use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::fields::{StudentIdInput, coerce_student_id, prepare_student_id};
use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// A student enrolled under a numeric ID that tolerates loosely typed input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Learner {
    pub id: i64,
    pub name: String,
    pub student_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewLearner {
    pub name: String,
    pub student_id: i64,
}

impl NewLearner {
    /// Coerce `raw` into an ID and check it before anything is stored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Field` when the input is not numeric or is not
    /// strictly positive.
    pub fn from_raw(name: impl Into<String>, raw: &StudentIdInput) -> Result<Self, CoreError> {
        let student_id = prepare_student_id(coerce_student_id(raw)?)?;
        Ok(Self {
            name: name.into(),
            student_id,
        })
    }
}

impl Validate for NewLearner {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(prepare_student_id(self.student_id).map(|_| ()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_coerces_strings_and_floats() {
        assert_eq!(NewLearner::from_raw("Ann", &"12".into()).unwrap().student_id, 12);
        assert_eq!(NewLearner::from_raw("Ann", &3.9_f64.into()).unwrap().student_id, 3);
    }

    #[test]
    fn from_raw_rejects_negative_strings() {
        let err = NewLearner::from_raw("Ann", &"-4".into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid field value: student_id: ID cannot be less than or equal to zero"
        );
    }
}
