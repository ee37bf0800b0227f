//! Repository modules, one per entity or exercise group.
//!
//! Each module adds methods to `LabService` via `impl LabService` blocks.

pub mod artifacts;
pub mod cars;
pub mod catalog;
pub mod characters;
pub mod custom_fields;
pub mod exercises;
pub mod gallery;
pub mod garage;
pub mod heroes;
pub mod hotel;
pub mod hotel_rooms;
pub mod invoices;
pub mod listings;
pub mod locations;
pub mod messaging;
pub mod pets;
pub mod planner;
pub mod portfolio;
pub mod restaurants;
pub mod students;
pub mod todos;
pub mod video_games;
pub mod workers;
pub mod zoo;
