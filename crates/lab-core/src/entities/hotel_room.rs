use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RoomType;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HotelRoom {
    pub id: i64,
    pub room_number: i64,
    pub room_type: RoomType,
    pub capacity: i64,
    pub amenities: String,
    pub price_per_night: Decimal,
    pub is_reserved: bool,
}

impl HotelRoom {
    #[must_use]
    pub fn price_line(&self) -> String {
        format!(
            "\n{} room with number {} costs {}$ per night!",
            self.room_type, self.room_number, self.price_per_night
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewHotelRoom {
    pub room_number: i64,
    pub room_type: RoomType,
    pub capacity: i64,
    pub amenities: String,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub is_reserved: bool,
}

impl Validate for NewHotelRoom {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::positive("room_number", self.room_number))
            .check(rules::positive("capacity", self.capacity))
            .check(rules::decimal_digits("price_per_night", self.price_per_night, 8, 2))
            .finish()
    }
}
