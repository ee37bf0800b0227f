//! Hotel room update builder.

use lab_core::enums::RoomType;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HotelRoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reserved: Option<bool>,
}

pub struct HotelRoomUpdateBuilder(HotelRoomUpdate);

impl HotelRoomUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(HotelRoomUpdate::default())
    }

    #[must_use]
    pub const fn room_type(mut self, room_type: RoomType) -> Self {
        self.0.room_type = Some(room_type);
        self
    }

    #[must_use]
    pub const fn capacity(mut self, capacity: i64) -> Self {
        self.0.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn amenities(mut self, amenities: impl Into<String>) -> Self {
        self.0.amenities = Some(amenities.into());
        self
    }

    #[must_use]
    pub const fn price_per_night(mut self, price: Decimal) -> Self {
        self.0.price_per_night = Some(price);
        self
    }

    #[must_use]
    pub const fn is_reserved(mut self, is_reserved: bool) -> Self {
        self.0.is_reserved = Some(is_reserved);
        self
    }

    #[must_use]
    pub fn build(self) -> HotelRoomUpdate {
        self.0
    }
}

impl Default for HotelRoomUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
