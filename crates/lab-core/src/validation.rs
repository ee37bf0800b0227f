//! Field-level rules and record-level validation.
//!
//! Rules are pure functions returning `Result<(), FieldError>`. A [`Validator`]
//! collects the outcome of every rule so callers see all rejected fields at
//! once, not only the first. Entities expose the result through [`Validate`],
//! which callers invoke explicitly before any persistence call.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Replace the default message, keeping the field name.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }
}

/// Every field error raised by one `validate()` call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether any error was raised for `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Messages raised for `field`, in rule order.
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Records that can be checked before they are persisted.
pub trait Validate {
    /// Run every declared rule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing each rejected field.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Accumulates rule outcomes for one record.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn check(&mut self, outcome: Result<(), FieldError>) -> &mut Self {
        if let Err(error) = outcome {
            self.errors.push(error);
        }
        self
    }

    /// Record a record-level rejection that is not tied to a single column.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    /// # Errors
    ///
    /// Returns the collected errors when at least one rule failed.
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.errors)))
        }
    }
}

/// Rule constructors. Default messages follow the wording users of the
/// exercises expect; use [`FieldError::with_message`] for custom text.
pub mod rules {
    use std::fmt::Display;

    use rust_decimal::Decimal;

    use super::FieldError;

    /// Field must not be empty or whitespace only.
    pub fn required(field: &str, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(FieldError::new(field, "This field cannot be blank."));
        }
        Ok(())
    }

    pub fn max_length(field: &str, value: &str, limit: usize) -> Result<(), FieldError> {
        let len = value.chars().count();
        if len > limit {
            return Err(FieldError::new(
                field,
                format!("Ensure this value has at most {limit} characters (it has {len})."),
            ));
        }
        Ok(())
    }

    pub fn min_length(field: &str, value: &str, limit: usize) -> Result<(), FieldError> {
        let len = value.chars().count();
        if len < limit {
            return Err(FieldError::new(
                field,
                format!("Ensure this value has at least {limit} characters (it has {len})."),
            ));
        }
        Ok(())
    }

    /// Inclusive character-length bounds, reported through the min/max messages.
    pub fn length_between(
        field: &str,
        value: &str,
        min: usize,
        max: usize,
    ) -> Result<(), FieldError> {
        min_length(field, value, min)?;
        max_length(field, value, max)
    }

    pub fn max_value<T: PartialOrd + Display>(
        field: &str,
        value: T,
        limit: T,
    ) -> Result<(), FieldError> {
        if value > limit {
            return Err(FieldError::new(
                field,
                format!("Ensure this value is less than or equal to {limit}."),
            ));
        }
        Ok(())
    }

    pub fn min_value<T: PartialOrd + Display>(
        field: &str,
        value: T,
        limit: T,
    ) -> Result<(), FieldError> {
        if value < limit {
            return Err(FieldError::new(
                field,
                format!("Ensure this value is greater than or equal to {limit}."),
            ));
        }
        Ok(())
    }

    /// Inclusive `[min, max]` range with a single message for either bound.
    pub fn value_range<T: PartialOrd + Display>(
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Result<(), FieldError> {
        if value < min || value > max {
            return Err(FieldError::new(
                field,
                format!("Ensure this value is between {min} and {max}."),
            ));
        }
        Ok(())
    }

    pub fn non_negative(field: &str, value: i64) -> Result<(), FieldError> {
        min_value(field, value, 0)
    }

    pub fn positive(field: &str, value: i64) -> Result<(), FieldError> {
        if value <= 0 {
            return Err(FieldError::new(
                field,
                "Ensure this value is greater than zero.",
            ));
        }
        Ok(())
    }

    /// Fixed-precision decimal: at most `max_digits` digits in total, of which
    /// at most `decimal_places` after the point.
    pub fn decimal_digits(
        field: &str,
        value: Decimal,
        max_digits: u32,
        decimal_places: u32,
    ) -> Result<(), FieldError> {
        let normalized = value.normalize();
        let decimals = normalized.scale();
        let mantissa_digits =
            u32::try_from(normalized.mantissa().unsigned_abs().to_string().len()).unwrap_or(u32::MAX);
        let digits = mantissa_digits.max(decimals);
        let whole_digits = digits - decimals;

        if digits > max_digits {
            return Err(FieldError::new(
                field,
                format!("Ensure that there are no more than {max_digits} digits in total."),
            ));
        }
        if decimals > decimal_places {
            return Err(FieldError::new(
                field,
                format!("Ensure that there are no more than {decimal_places} decimal places."),
            ));
        }
        let max_whole = max_digits.saturating_sub(decimal_places);
        if whole_digits > max_whole {
            return Err(FieldError::new(
                field,
                format!(
                    "Ensure that there are no more than {max_whole} digits before the decimal point."
                ),
            ));
        }
        Ok(())
    }

    /// Value must be one of the declared choice labels.
    pub fn one_of(field: &str, value: &str, choices: &[&str]) -> Result<(), FieldError> {
        if !choices.contains(&value) {
            return Err(FieldError::new(
                field,
                format!("Value '{value}' is not a valid choice."),
            ));
        }
        Ok(())
    }

    /// Every needle must appear somewhere in `value`.
    pub fn contains_all(field: &str, value: &str, needles: &[&str]) -> Result<(), FieldError> {
        let missing: Vec<&str> = needles
            .iter()
            .copied()
            .filter(|needle| !value.contains(needle))
            .collect();
        if !missing.is_empty() {
            return Err(FieldError::new(
                field,
                format!("Missing required content: {}.", missing.join(", ")),
            ));
        }
        Ok(())
    }

    /// Loose email shape: one `@`, non-empty local part, dotted domain.
    pub fn email_like(field: &str, value: &str) -> Result<(), FieldError> {
        let valid = value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        });
        if !valid {
            return Err(FieldError::new(field, "Enter a valid email address."));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::rules::*;
    use super::*;

    #[test]
    fn validator_collects_every_error() {
        let mut v = Validator::new();
        v.check(max_length("name", "abcdef", 3))
            .check(min_value("age", -1, 0))
            .check(required("title", "ok"));
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("age"));
        assert!(!errors.has_field("title"));
    }

    #[test]
    fn validator_passes_when_clean() {
        let mut v = Validator::new();
        v.check(max_length("name", "abc", 3));
        assert!(v.finish().is_ok());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(max_length("name", "ñññ", 3).is_ok());
        assert!(min_length("name", "ñ", 2).is_err());
    }

    #[test]
    fn length_between_checks_both_bounds() {
        assert!(length_between("name", "ab", 2, 4).is_ok());
        assert!(length_between("name", "a", 2, 4).is_err());
        assert!(length_between("name", "abcde", 2, 4).is_err());
    }

    #[test]
    fn decimal_range_is_inclusive() {
        let min = Decimal::new(0, 1);
        let max = Decimal::new(100, 1);
        assert!(value_range("rating", Decimal::new(100, 1), min, max).is_ok());
        assert!(value_range("rating", Decimal::new(0, 1), min, max).is_ok());
        assert!(value_range("rating", Decimal::new(101, 1), min, max).is_err());
    }

    #[test]
    fn decimal_digits_checks_precision_and_scale() {
        // max_digits=3, decimal_places=2 (restaurant rating)
        assert!(decimal_digits("rating", Decimal::new(450, 2), 3, 2).is_ok());
        assert!(decimal_digits("rating", Decimal::new(4505, 3), 3, 2).is_err());
        assert!(decimal_digits("rating", Decimal::new(1000, 2), 3, 2).is_err());
        // trailing zeros do not count against the scale
        assert!(decimal_digits("rating", Decimal::new(45000, 4), 3, 2).is_ok());
        assert!(decimal_digits("price", Decimal::new(5, 2), 10, 2).is_ok());
    }

    #[test]
    fn custom_message_replaces_default() {
        let err = max_value("rating", 6, 5)
            .map_err(|e| e.with_message("Rating cannot exceed 5."))
            .unwrap_err();
        assert_eq!(err.to_string(), "rating: Rating cannot exceed 5.");
    }

    #[test]
    fn one_of_rejects_unknown_label() {
        assert!(one_of("specialty", "Fish", &["Mammals", "Birds"]).is_err());
        assert!(one_of("specialty", "Birds", &["Mammals", "Birds"]).is_ok());
    }

    #[test]
    fn contains_all_lists_missing_needles() {
        let err = contains_all("description", "Appetizers only", &["Appetizers", "Desserts"])
            .unwrap_err();
        assert!(err.message.contains("Desserts"));
        assert!(!err.message.contains("Appetizers,"));
    }

    #[test]
    fn email_shape() {
        assert!(email_like("email", "john.doe@university.com").is_ok());
        assert!(email_like("email", "john.doe").is_err());
        assert!(email_like("email", "@university.com").is_err());
        assert!(email_like("email", "a@b@c.com").is_err());
        assert!(email_like("email", "a@localhost").is_err());
    }

    #[test]
    fn display_joins_errors() {
        let mut v = Validator::new();
        v.reject("a", "first").reject("b", "second");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.to_string(), "a: first; b: second");
        assert_eq!(errors.messages_for("b"), vec!["second"]);
    }
}
