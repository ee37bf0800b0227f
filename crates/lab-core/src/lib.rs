//! # lab-core
//!
//! Core types shared by every ormlab crate.
//!
//! - Entity structs for every exercise domain (students, rooms, reservations, ...)
//! - Choice enums stored by their display label
//! - Field and record validation rules with an explicit `validate()` entry point
//! - Custom field codecs (masked card numbers, coerced student IDs)
//! - Read-only admin metadata describing which columns to surface
//! - Cross-cutting error types

pub mod admin;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
pub mod validation;
