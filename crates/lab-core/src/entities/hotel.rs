//! Hotels, their rooms and date-range reservations.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReservationKind;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

pub const OVER_CAPACITY: &str = "Total guests are more than the capacity of the room";
pub const INVALID_PERIOD: &str = "Start date cannot be after or in the same end date";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
}

impl Validate for NewHotel {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(rules::max_length("address", &self.address, 200))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub number: String,
    pub capacity: i64,
    pub total_guests: i64,
    pub price_per_night: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRoom {
    pub hotel_id: i64,
    pub number: String,
    pub capacity: i64,
    pub total_guests: i64,
    pub price_per_night: Decimal,
}

impl Validate for NewRoom {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.check(rules::required("number", &self.number))
            .check(rules::max_length("number", &self.number, 100))
            .check(rules::non_negative("capacity", self.capacity))
            .check(rules::non_negative("total_guests", self.total_guests))
            .check(rules::decimal_digits(
                "price_per_night",
                self.price_per_night,
                10,
                2,
            ));
        if self.total_guests > self.capacity {
            v.reject("total_guests", OVER_CAPACITY);
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: ReservationKind,
}

impl Reservation {
    /// Length of stay in nights.
    #[must_use]
    pub fn reservation_period(&self) -> i64 {
        period_days(self.start_date, self.end_date)
    }

    /// Nights times the room's nightly price, rounded to cents.
    #[must_use]
    pub fn calculate_total_cost(&self, price_per_night: Decimal) -> Decimal {
        (Decimal::from(self.reservation_period()) * price_per_night).round_dp(2)
    }

    /// Whether this stay shares at least one day with `[start, end]`.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.end_date >= start && self.start_date <= end
    }

    /// The end date pushed out by `days`, or `None` on calendar overflow.
    #[must_use]
    pub fn extended_end(&self, days: u64) -> Option<NaiveDate> {
        self.end_date.checked_add_days(Days::new(days))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewReservation {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: ReservationKind,
}

impl NewReservation {
    #[must_use]
    pub fn reservation_period(&self) -> i64 {
        period_days(self.start_date, self.end_date)
    }
}

impl Validate for NewReservation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if self.start_date >= self.end_date {
            v.reject("start_date", INVALID_PERIOD);
        }
        v.finish()
    }
}

fn period_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
