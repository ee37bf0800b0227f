use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewOwner {
    pub name: String,
}

impl Validate for NewOwner {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 50))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i64,
    pub model: String,
    pub year: i64,
    pub owner_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewVehicle {
    pub model: String,
    pub year: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

impl Validate for NewVehicle {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("model", &self.model))
            .check(rules::max_length("model", &self.model, 50))
            .finish()
    }
}

/// One-to-one registration plate, optionally attached to a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Registration {
    pub id: i64,
    pub registration_number: String,
    pub registration_date: Option<NaiveDate>,
    pub vehicle_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRegistration {
    pub registration_number: String,
    #[serde(default)]
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
}

impl Validate for NewRegistration {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("registration_number", &self.registration_number))
            .check(rules::max_length(
                "registration_number",
                &self.registration_number,
                10,
            ))
            .finish()
    }
}

/// Admin summary for a vehicle, tolerating a missing owner or registration.
#[must_use]
pub fn car_details(owner: Option<&Owner>, registration: Option<&Registration>) -> String {
    let owner_name = owner.map_or("No owner", |o| o.name.as_str());
    let plate = registration.map_or("No registration number", |r| {
        r.registration_number.as_str()
    });
    format!("Owner: {owner_name}, Registration: {plate}")
}
