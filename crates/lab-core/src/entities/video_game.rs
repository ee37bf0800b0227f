use std::fmt;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Genre;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

pub const RELEASE_YEAR_MESSAGE: &str = "The release year must be between 1990 and 2023";
pub const RATING_MESSAGE: &str = "The rating must be between 0.0 and 10.0";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VideoGame {
    pub id: i64,
    pub title: String,
    pub genre: Genre,
    pub release_year: i64,
    pub rating: Decimal,
}

impl fmt::Display for VideoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewVideoGame {
    pub title: String,
    pub genre: Genre,
    pub release_year: i64,
    pub rating: Decimal,
}

impl Validate for NewVideoGame {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("title", &self.title))
            .check(rules::max_length("title", &self.title, 100))
            .check(
                rules::value_range("release_year", self.release_year, 1990, 2023)
                    .map_err(|e| e.with_message(RELEASE_YEAR_MESSAGE)),
            )
            .check(
                rules::value_range("rating", self.rating, Decimal::ZERO, Decimal::TEN)
                    .map_err(|e| e.with_message(RATING_MESSAGE)),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(release_year: i64, rating: Decimal) -> NewVideoGame {
        NewVideoGame {
            title: "The Witcher 3".into(),
            genre: Genre::Rpg,
            release_year,
            rating,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(game(1990, Decimal::ZERO).validate().is_ok());
        assert!(game(2023, Decimal::TEN).validate().is_ok());
    }

    #[test]
    fn out_of_range_uses_custom_messages() {
        let errors = game(1989, Decimal::new(101, 1)).validate().unwrap_err();
        assert_eq!(errors.messages_for("release_year"), vec![RELEASE_YEAR_MESSAGE]);
        assert_eq!(errors.messages_for("rating"), vec![RATING_MESSAGE]);
    }
}
