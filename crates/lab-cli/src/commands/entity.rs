use anyhow::bail;
use lab_core::entities::{
    NewAnimal, NewArtifact, NewArtwork, NewBillingInfo, NewCar, NewCharacter, NewCreditCard,
    NewExercise, NewHero, NewHotel, NewHotelRoom, NewInvoice, NewLaptop, NewLearner,
    NewLocation, NewMenu, NewMenuReview, NewMessage, NewOwner, NewPet, NewProduct,
    NewProgrammer, NewProject, NewRealEstateListing, NewRegistration, NewReservation,
    NewRestaurant, NewRestaurantReview, NewRoom, NewStudent, NewTask, NewTechnology, NewTodo,
    NewUserProfile, NewVehicle, NewVeterinarian, NewVideoGame, NewWorker, NewZooKeeper,
};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CreateArgs, ListArgs};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_payload;
use crate::context::AppContext;
use crate::output::output;

/// Entity keys accepted by `lab create`.
pub const CREATABLE: &[&str] = &[
    "product",
    "student",
    "pet",
    "artifact",
    "location",
    "car",
    "todo",
    "hotel_room",
    "character",
    "artwork",
    "laptop",
    "owner",
    "vehicle",
    "registration",
    "animal",
    "zoo_keeper",
    "veterinarian",
    "hero",
    "user_profile",
    "message",
    "learner",
    "credit_card",
    "hotel",
    "room",
    "reservation",
    "restaurant",
    "menu",
    "restaurant_review",
    "menu_review",
    "listing",
    "video_game",
    "billing_info",
    "invoice",
    "technology",
    "project",
    "programmer",
    "task",
    "exercise",
    "worker",
];

/// Entity keys accepted by `lab list`.
pub const LISTABLE: &[&str] = &[
    "product",
    "student",
    "pet",
    "artifact",
    "location",
    "car",
    "todo",
    "hotel_room",
    "character",
    "artwork",
    "laptop",
    "vehicle",
    "animal",
    "veterinarian",
    "hero",
    "learner",
    "credit_card",
    "restaurant",
    "video_game",
    "worker",
];

/// Parse `$payload` as `$new`, persist it with `$method`, return the stored row as JSON.
macro_rules! create_as {
    ($ctx:expr, $args:expr, $new:ty, $method:ident) => {{
        let new: $new = parse_payload(&$args.payload, &$args.entity)?;
        serde_json::to_value($ctx.service.$method(&new).await?)?
    }};
}

/// Handle `lab create <entity> <json>`.
pub async fn create(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = match args.entity.as_str() {
        "product" => create_as!(ctx, args, NewProduct, create_product),
        "student" => create_as!(ctx, args, NewStudent, create_student),
        "pet" => create_as!(ctx, args, NewPet, insert_pet),
        "artifact" => create_as!(ctx, args, NewArtifact, insert_artifact),
        "location" => create_as!(ctx, args, NewLocation, create_location),
        "car" => create_as!(ctx, args, NewCar, create_car),
        "todo" => create_as!(ctx, args, NewTodo, create_todo),
        "hotel_room" => create_as!(ctx, args, NewHotelRoom, create_hotel_room),
        "character" => create_as!(ctx, args, NewCharacter, create_character),
        "artwork" => create_as!(ctx, args, NewArtwork, create_artwork),
        "laptop" => create_as!(ctx, args, NewLaptop, create_laptop),
        "owner" => create_as!(ctx, args, NewOwner, create_owner),
        "vehicle" => create_as!(ctx, args, NewVehicle, create_vehicle),
        "registration" => create_as!(ctx, args, NewRegistration, create_registration),
        "animal" => create_as!(ctx, args, NewAnimal, create_animal),
        "zoo_keeper" => create_as!(ctx, args, NewZooKeeper, create_zoo_keeper),
        "veterinarian" => create_as!(ctx, args, NewVeterinarian, create_veterinarian),
        "hero" => create_as!(ctx, args, NewHero, create_hero),
        "user_profile" => create_as!(ctx, args, NewUserProfile, create_user_profile),
        "message" => create_as!(ctx, args, NewMessage, send_message),
        "learner" => create_as!(ctx, args, NewLearner, create_learner),
        "credit_card" => create_as!(ctx, args, NewCreditCard, create_credit_card),
        "hotel" => create_as!(ctx, args, NewHotel, create_hotel),
        "room" => create_as!(ctx, args, NewRoom, insert_room),
        "reservation" => create_as!(ctx, args, NewReservation, book_reservation),
        "restaurant" => create_as!(ctx, args, NewRestaurant, create_restaurant),
        "menu" => create_as!(ctx, args, NewMenu, create_menu),
        "restaurant_review" => {
            create_as!(ctx, args, NewRestaurantReview, create_restaurant_review)
        }
        "menu_review" => create_as!(ctx, args, NewMenuReview, create_menu_review),
        "listing" => create_as!(ctx, args, NewRealEstateListing, create_listing),
        "video_game" => create_as!(ctx, args, NewVideoGame, create_video_game),
        "billing_info" => create_as!(ctx, args, NewBillingInfo, create_billing_info),
        "invoice" => create_as!(ctx, args, NewInvoice, create_invoice),
        "technology" => create_as!(ctx, args, NewTechnology, create_technology),
        "project" => create_as!(ctx, args, NewProject, create_project),
        "programmer" => create_as!(ctx, args, NewProgrammer, create_programmer),
        "task" => create_as!(ctx, args, NewTask, create_task),
        "exercise" => create_as!(ctx, args, NewExercise, create_exercise),
        "worker" => create_as!(ctx, args, NewWorker, create_worker),
        other => bail!(
            "unknown entity '{other}'; expected one of: {}",
            CREATABLE.join(", ")
        ),
    };
    tracing::info!(entity = %args.entity, "entity created");
    output(&stored, flags.format)
}

/// Every stored row of `entity`, serialized.
pub async fn rows_of(ctx: &AppContext, entity: &str) -> anyhow::Result<Vec<Value>> {
    let service = &ctx.service;
    let value = match entity {
        "product" => serde_json::to_value(service.list_products().await?)?,
        "student" => serde_json::to_value(service.list_students().await?)?,
        "pet" => serde_json::to_value(service.list_pets().await?)?,
        "artifact" => serde_json::to_value(service.list_artifacts().await?)?,
        "location" => serde_json::to_value(service.list_locations().await?)?,
        "car" => serde_json::to_value(service.list_cars().await?)?,
        "todo" => serde_json::to_value(service.list_todos().await?)?,
        "hotel_room" => serde_json::to_value(service.list_hotel_rooms().await?)?,
        "character" => serde_json::to_value(service.list_characters().await?)?,
        "artwork" => serde_json::to_value(service.list_artworks().await?)?,
        "laptop" => serde_json::to_value(service.list_laptops().await?)?,
        "vehicle" => serde_json::to_value(service.list_vehicles().await?)?,
        "animal" => serde_json::to_value(service.list_animals().await?)?,
        "veterinarian" => serde_json::to_value(service.list_veterinarians().await?)?,
        "hero" => serde_json::to_value(service.list_heroes().await?)?,
        "learner" => serde_json::to_value(service.list_learners().await?)?,
        "credit_card" => serde_json::to_value(service.list_credit_cards().await?)?,
        "restaurant" => serde_json::to_value(service.list_restaurants().await?)?,
        "video_game" => serde_json::to_value(service.list_video_games().await?)?,
        "worker" => serde_json::to_value(service.list_workers().await?)?,
        other => bail!(
            "cannot list '{other}'; expected one of: {}",
            LISTABLE.join(", ")
        ),
    };
    match value {
        Value::Array(rows) => Ok(rows),
        _ => bail!("listing '{entity}' did not produce rows"),
    }
}

/// Handle `lab list <entity>`.
pub async fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = rows_of(ctx, &args.entity).await?;
    let limit = effective_limit(flags.limit, flags.default_limit);
    output(&truncate(rows, limit), flags.format)
}
