use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PropertyType;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RealEstateListing {
    pub id: i64,
    pub property_type: PropertyType,
    pub price: Decimal,
    pub bedrooms: i64,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRealEstateListing {
    pub property_type: PropertyType,
    pub price: Decimal,
    pub bedrooms: i64,
    pub location: String,
}

impl Validate for NewRealEstateListing {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::decimal_digits("price", self.price, 10, 2))
            .check(rules::non_negative("bedrooms", self.bedrooms))
            .check(rules::required("location", &self.location))
            .check(rules::max_length("location", &self.location, 100))
            .finish()
    }
}

/// Row of the popular-locations aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LocationCount {
    pub location: String,
    pub location_count: i64,
}
