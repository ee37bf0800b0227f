//! Zoo animals and staff.
//!
//! Animal subtypes share one table; the subtype-specific column lives in the
//! [`AnimalKind`] payload. Staff share [`EmployeeFields`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Specialty;
use crate::fields::Availability;
use crate::validation::{Validate, ValidationErrors, Validator, rules};

const ENDANGERED_SPECIES: &[&str] = &["Cross River Gorilla", "Orangutan", "Green Turtle"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimalKind {
    #[default]
    Plain,
    Mammal { fur_color: String },
    Bird { wing_span: Decimal },
    Reptile { scale_type: String },
}

impl AnimalKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Mammal { .. } => "mammal",
            Self::Bird { .. } => "bird",
            Self::Reptile { .. } => "reptile",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub sound: String,
    #[serde(flatten)]
    pub kind: AnimalKind,
}

impl Animal {
    /// Age in full years on `today`.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut years = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        years
    }

    #[must_use]
    pub fn display_info(&self) -> String {
        format!(
            "Meet {}! Species: {}, born {}. It makes a noise like '{}'.",
            self.name, self.species, self.birth_date, self.sound
        )
    }

    #[must_use]
    pub fn is_endangered(&self) -> String {
        if ENDANGERED_SPECIES.contains(&self.species.as_str()) {
            format!("{} is at risk!", self.species)
        } else {
            format!("{} is not at risk.", self.species)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub sound: String,
    #[serde(flatten)]
    pub kind: AnimalKind,
}

impl Validate for NewAnimal {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(rules::max_length("species", &self.species, 100))
            .check(rules::max_length("sound", &self.sound, 100));
        match &self.kind {
            AnimalKind::Plain => {}
            AnimalKind::Mammal { fur_color } => {
                v.check(rules::max_length("fur_color", fur_color, 50));
            }
            AnimalKind::Bird { wing_span } => {
                v.check(rules::decimal_digits("wing_span", *wing_span, 5, 2));
            }
            AnimalKind::Reptile { scale_type } => {
                v.check(rules::max_length("scale_type", scale_type, 50));
            }
        }
        v.finish()
    }
}

/// Columns every staff member carries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl EmployeeFields {
    fn check(&self, v: &mut Validator) {
        v.check(rules::max_length("first_name", &self.first_name, 50))
            .check(rules::max_length("last_name", &self.last_name, 50))
            .check(rules::max_length("phone_number", &self.phone_number, 10));
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZooKeeper {
    pub id: i64,
    #[serde(flatten)]
    pub employee: EmployeeFields,
    pub specialty: Specialty,
    pub managed_animal_ids: Vec<i64>,
}

/// Specialty stays a raw label here: it is checked against the choices in
/// `validate()` rather than at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewZooKeeper {
    #[serde(flatten)]
    pub employee: EmployeeFields,
    pub specialty: String,
    #[serde(default)]
    pub managed_animal_ids: Vec<i64>,
}

impl NewZooKeeper {
    /// The parsed specialty, if the label is one of the choices.
    #[must_use]
    pub fn specialty(&self) -> Option<Specialty> {
        Specialty::from_label(&self.specialty)
    }
}

impl Validate for NewZooKeeper {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        self.employee.check(&mut v);
        v.check(
            rules::one_of("specialty", &self.specialty, Specialty::LABELS)
                .map_err(|e| e.with_message("Specialty must be a valid choice.")),
        );
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Veterinarian {
    pub id: i64,
    #[serde(flatten)]
    pub employee: EmployeeFields,
    pub license_number: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewVeterinarian {
    #[serde(flatten)]
    pub employee: EmployeeFields,
    pub license_number: String,
    #[serde(default)]
    pub availability: Availability,
}

impl Validate for NewVeterinarian {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        self.employee.check(&mut v);
        v.check(rules::max_length("license_number", &self.license_number, 10));
        v.finish()
    }
}
