//! Custom scalar encodings with their own parse and storage rules.
//!
//! Each codec is a pure function pair: parse the raw user input (rejecting
//! it with a [`FieldError`]) and produce the value that is actually stored.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::FieldError;

// ---------------------------------------------------------------------------
// Masked credit card numbers
// ---------------------------------------------------------------------------

const CARD_DIGITS: usize = 16;
const MASK_PREFIX: &str = "****-****-****-";

/// A card number that only ever exists in masked form (`****-****-****-1234`).
///
/// The full number is inspected once in [`MaskedCardNumber::parse`] and then
/// discarded; only the last four digits survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct MaskedCardNumber(String);

impl MaskedCardNumber {
    /// Validate a raw 16-digit card number and mask it.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` when the input has non-digit content or is not
    /// exactly 16 characters long.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !raw.chars().all(|c| c.is_ascii_digit()) || raw.is_empty() {
            return Err(FieldError::new(
                "card_number",
                "The card number must contain only digits",
            ));
        }
        if raw.len() != CARD_DIGITS {
            return Err(FieldError::new(
                "card_number",
                "The card number must be exactly 16 characters long",
            ));
        }
        Ok(Self(format!("{MASK_PREFIX}{}", &raw[CARD_DIGITS - 4..])))
    }

    /// Rebuild from a value read back from storage, which is already masked.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` when the stored value is not in masked form.
    pub fn from_stored(stored: &str) -> Result<Self, FieldError> {
        let valid = stored
            .strip_prefix(MASK_PREFIX)
            .is_some_and(|tail| tail.len() == 4 && tail.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(FieldError::new(
                "card_number",
                format!("Stored card number is not masked: '{stored}'"),
            ));
        }
        Ok(Self(stored.to_string()))
    }

    #[must_use]
    pub fn masked(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn last_four(&self) -> &str {
        &self.0[MASK_PREFIX.len()..]
    }
}

impl fmt::Display for MaskedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MaskedCardNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_stored(&raw)
            .or_else(|_| Self::parse(&raw))
            .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Coerced student IDs
// ---------------------------------------------------------------------------

/// Raw student ID as it may arrive from a caller: integer, float or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentIdInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for StudentIdInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StudentIdInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StudentIdInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerce any accepted representation to an integer, truncating toward zero.
///
/// Numeric strings may be negative or fractional (`"-3.7"` → `-3`).
///
/// # Errors
///
/// Returns `FieldError` ("Invalid input for student ID") for non-numeric or
/// non-finite input.
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_student_id(input: &StudentIdInput) -> Result<i64, FieldError> {
    let invalid = || FieldError::new("student_id", "Invalid input for student ID");
    let as_float = match input {
        StudentIdInput::Int(value) => return Ok(*value),
        StudentIdInput::Float(value) => *value,
        StudentIdInput::Text(text) => text.trim().parse::<f64>().map_err(|_| invalid())?,
    };
    if !as_float.is_finite() || as_float.abs() >= 9.2e18 {
        return Err(invalid());
    }
    Ok(as_float.trunc() as i64)
}

/// Check a coerced student ID right before it is written.
///
/// # Errors
///
/// Returns `FieldError` when the ID is zero or negative.
pub fn prepare_student_id(value: i64) -> Result<i64, FieldError> {
    if value <= 0 {
        return Err(FieldError::new(
            "student_id",
            "ID cannot be less than or equal to zero",
        ));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Availability (boolean with display labels)
// ---------------------------------------------------------------------------

/// Boolean choice displayed as "Available" / "Not Available". Defaults to available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Availability(pub bool);

impl Availability {
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.0 { "Available" } else { "Not Available" }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        self.0
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self(true)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn masks_all_but_last_four() {
        let card = MaskedCardNumber::parse("1234567812345678").unwrap();
        assert_eq!(card.masked(), "****-****-****-5678");
        assert_eq!(card.last_four(), "5678");
        assert!(!card.to_string().contains("12345678"));
    }

    #[test]
    fn rejects_non_digits_and_wrong_length() {
        let err = MaskedCardNumber::parse("1234-5678-1234-5678").unwrap_err();
        assert_eq!(err.message, "The card number must contain only digits");

        let err = MaskedCardNumber::parse("12345678").unwrap_err();
        assert_eq!(
            err.message,
            "The card number must be exactly 16 characters long"
        );

        assert!(MaskedCardNumber::parse("").is_err());
    }

    #[test]
    fn serialized_form_is_masked() {
        let card = MaskedCardNumber::parse("4000123412341234").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"****-****-****-1234\"");
        let back: MaskedCardNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn deserializing_raw_number_masks_it() {
        let card: MaskedCardNumber = serde_json::from_str("\"4000123412349999\"").unwrap();
        assert_eq!(card.masked(), "****-****-****-9999");
    }

    #[test]
    fn from_stored_rejects_unmasked() {
        assert!(MaskedCardNumber::from_stored("4000123412349999").is_err());
        assert!(MaskedCardNumber::from_stored("****-****-****-12a4").is_err());
    }

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_student_id(&StudentIdInput::Int(45)).unwrap(), 45);
        assert_eq!(coerce_student_id(&12.9_f64.into()).unwrap(), 12);
        assert_eq!(coerce_student_id(&"34".into()).unwrap(), 34);
        assert_eq!(coerce_student_id(&"-3.7".into()).unwrap(), -3);
        assert_eq!(coerce_student_id(&" 7.0 ".into()).unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric_student_id() {
        let err = coerce_student_id(&"abc".into()).unwrap_err();
        assert_eq!(err.message, "Invalid input for student ID");
        assert!(coerce_student_id(&f64::NAN.into()).is_err());
    }

    #[test]
    fn prepare_rejects_non_positive() {
        assert_eq!(prepare_student_id(1).unwrap(), 1);
        let err = prepare_student_id(0).unwrap_err();
        assert_eq!(err.message, "ID cannot be less than or equal to zero");
        assert!(prepare_student_id(-5).is_err());
    }

    #[test]
    fn availability_labels() {
        assert!(Availability::default().is_available());
        assert_eq!(Availability(true).label(), "Available");
        assert_eq!(Availability(false).to_string(), "Not Available");
    }
}
