use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::fields::MaskedCardNumber;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreditCard {
    pub id: i64,
    pub card_owner: String,
    pub card_number: MaskedCardNumber,
}

/// Payload for a new card. The raw number is masked on construction, so
/// nothing downstream ever sees more than the last four digits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCreditCard {
    pub card_owner: String,
    pub card_number: MaskedCardNumber,
}

impl NewCreditCard {
    /// # Errors
    ///
    /// Returns `CoreError::Field` when `raw_number` is not 16 digits.
    pub fn new(card_owner: impl Into<String>, raw_number: &str) -> Result<Self, CoreError> {
        Ok(Self {
            card_owner: card_owner.into(),
            card_number: MaskedCardNumber::parse(raw_number)?,
        })
    }
}

impl Validate for NewCreditCard {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("card_owner", &self.card_owner))
            .check(rules::max_length("card_owner", &self.card_owner, 100))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_masked() {
        let card = NewCreditCard::new("Ivan", "1234567890123456").unwrap();
        let debug = format!("{card:?}");
        assert!(debug.contains("****-****-****-3456"));
        assert!(!debug.contains("1234567890"));
    }

    #[test]
    fn invalid_number_is_a_field_error() {
        let err = NewCreditCard::new("Ivan", "12ab").unwrap_err();
        assert!(matches!(err, CoreError::Field(_)));
    }
}
