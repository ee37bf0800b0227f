use anyhow::bail;
use lab_core::entities::{
    Animal, Artifact, Artwork, BillingInfo, Car, Character, CreditCard, Exercise, Hero, Hotel,
    HotelRoom, Invoice, Laptop, Learner, Location, Menu, MenuReview, Message, Owner, Pet,
    Product, Programmer, Project, RealEstateListing, Registration, Reservation, Restaurant,
    RestaurantReview, Room, Student, Task, Technology, Todo, UserProfile, Vehicle, Veterinarian,
    VideoGame, Worker, ZooKeeper,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::entity::CREATABLE;
use crate::output::output;

/// JSON schema of the stored shape of `entity`.
pub fn schema_of(entity: &str) -> anyhow::Result<Schema> {
    let schema = match entity {
        "product" => schema_for!(Product),
        "student" => schema_for!(Student),
        "pet" => schema_for!(Pet),
        "artifact" => schema_for!(Artifact),
        "location" => schema_for!(Location),
        "car" => schema_for!(Car),
        "todo" => schema_for!(Todo),
        "hotel_room" => schema_for!(HotelRoom),
        "character" => schema_for!(Character),
        "artwork" => schema_for!(Artwork),
        "laptop" => schema_for!(Laptop),
        "owner" => schema_for!(Owner),
        "vehicle" => schema_for!(Vehicle),
        "registration" => schema_for!(Registration),
        "animal" => schema_for!(Animal),
        "zoo_keeper" => schema_for!(ZooKeeper),
        "veterinarian" => schema_for!(Veterinarian),
        "hero" => schema_for!(Hero),
        "user_profile" => schema_for!(UserProfile),
        "message" => schema_for!(Message),
        "learner" => schema_for!(Learner),
        "credit_card" => schema_for!(CreditCard),
        "hotel" => schema_for!(Hotel),
        "room" => schema_for!(Room),
        "reservation" => schema_for!(Reservation),
        "restaurant" => schema_for!(Restaurant),
        "menu" => schema_for!(Menu),
        "restaurant_review" => schema_for!(RestaurantReview),
        "menu_review" => schema_for!(MenuReview),
        "listing" => schema_for!(RealEstateListing),
        "video_game" => schema_for!(VideoGame),
        "billing_info" => schema_for!(BillingInfo),
        "invoice" => schema_for!(Invoice),
        "technology" => schema_for!(Technology),
        "project" => schema_for!(Project),
        "programmer" => schema_for!(Programmer),
        "task" => schema_for!(Task),
        "exercise" => schema_for!(Exercise),
        "worker" => schema_for!(Worker),
        other => bail!(
            "unknown entity '{other}'; expected one of: {}",
            CREATABLE.join(", ")
        ),
    };
    Ok(schema)
}

/// Handle `lab schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(&args.entity)?, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_creatable_entity_has_a_schema() {
        for entity in CREATABLE {
            assert!(schema_of(entity).is_ok(), "no schema for {entity}");
        }
    }

    #[test]
    fn video_game_schema_names_its_fields() {
        let schema = serde_json::to_value(schema_of("video_game").unwrap()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("rating"));
        assert!(properties.contains_key("genre"));
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(schema_of("spaceship").is_err());
    }
}
