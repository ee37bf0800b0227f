use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LaptopBrand, OperatingSystem};
use crate::validation::{Validate, ValidationErrors, Validator, rules};

/// A gallery piece. Ratings may be negative; those get purged in bulk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Artwork {
    pub id: i64,
    pub artist_name: String,
    pub art_name: String,
    pub rating: i64,
    pub price: Decimal,
}

impl Artwork {
    #[must_use]
    pub fn highest_rated_line(&self) -> String {
        format!(
            "{} is the highest-rated art with a {} rating!",
            self.art_name, self.rating
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewArtwork {
    pub artist_name: String,
    pub art_name: String,
    pub rating: i64,
    pub price: Decimal,
}

impl Validate for NewArtwork {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::max_length("artist_name", &self.artist_name, 100))
            .check(rules::max_length("art_name", &self.art_name, 100))
            .check(rules::decimal_digits("price", self.price, 10, 2))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Laptop {
    pub id: i64,
    pub brand: LaptopBrand,
    pub processor: String,
    /// GB
    pub memory: i64,
    /// GB
    pub storage: i64,
    pub operation_system: OperatingSystem,
    pub price: Decimal,
}

impl Laptop {
    #[must_use]
    pub fn most_expensive_line(&self) -> String {
        format!(
            "{} is the most expensive laptop available for {}$!",
            self.brand, self.price
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewLaptop {
    pub brand: LaptopBrand,
    pub processor: String,
    pub memory: i64,
    pub storage: i64,
    pub operation_system: OperatingSystem,
    pub price: Decimal,
}

impl Validate for NewLaptop {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::max_length("processor", &self.processor, 100))
            .check(rules::non_negative("memory", self.memory))
            .check(rules::non_negative("storage", self.storage))
            .check(rules::decimal_digits("price", self.price, 10, 2))
            .finish()
    }
}
