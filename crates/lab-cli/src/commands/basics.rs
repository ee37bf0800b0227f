use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    ArtifactCommands, CarCommands, CharacterCommands, LocationCommands, PetCommands,
    RoomCommands, TodoCommands,
};
use crate::context::AppContext;
use crate::output::{message, output};

/// Handle `lab pets`.
pub async fn pets(action: &PetCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PetCommands::Create { name, species } => {
            message(&ctx.service.create_pet(name, species).await?, flags.format)
        }
    }
}

/// Handle `lab artifacts`.
pub async fn artifacts(
    action: &ArtifactCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ArtifactCommands::Rename { name, new_name } => {
            let mut artifact = ctx.service.get_artifact_by_name(name).await?;
            let renamed = ctx.service.rename_artifact(&mut artifact, new_name).await?;
            if !renamed {
                tracing::info!(name = %artifact.name, "artifact not eligible for renaming");
            }
            output(&json!({ "renamed": renamed, "artifact": artifact }), flags.format)
        }
        ArtifactCommands::DeleteAll => {
            let deleted = ctx.service.delete_all_artifacts().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}

/// Handle `lab locations`.
pub async fn locations(
    action: &LocationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LocationCommands::Show => message(&ctx.service.show_all_locations().await?, flags.format),
        LocationCommands::NewCapital => output(&ctx.service.new_capital().await?, flags.format),
        LocationCommands::Capitals => output(&ctx.service.get_capitals().await?, flags.format),
        LocationCommands::DeleteFirst => {
            let deleted = ctx.service.delete_first_location().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}

/// Handle `lab cars`.
pub async fn cars(action: &CarCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CarCommands::ApplyDiscount => {
            let updated = ctx.service.apply_discount().await?;
            output(&json!({ "updated": updated }), flags.format)
        }
        CarCommands::Recent => output(&ctx.service.get_recent_cars().await?, flags.format),
        CarCommands::DeleteLast => {
            let deleted = ctx.service.delete_last_car().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}

/// Handle `lab todos`.
pub async fn todos(action: &TodoCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TodoCommands::Unfinished => {
            message(&ctx.service.show_unfinished_tasks().await?, flags.format)
        }
        TodoCommands::CompleteOdd => {
            let updated = ctx.service.complete_odd_tasks().await?;
            output(&json!({ "updated": updated }), flags.format)
        }
        TodoCommands::Encode { text, title } => {
            output(&ctx.service.encode_and_replace(text, title).await?, flags.format)
        }
    }
}

/// Handle `lab rooms`.
pub async fn rooms(action: &RoomCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RoomCommands::Deluxe => message(&ctx.service.get_deluxe_rooms().await?, flags.format),
        RoomCommands::IncreaseCapacity => {
            let updated = ctx.service.increase_room_capacity().await?;
            output(&json!({ "updated": updated }), flags.format)
        }
        RoomCommands::ReserveFirst => {
            output(&ctx.service.reserve_first_room().await?, flags.format)
        }
        RoomCommands::DeleteLast => {
            let deleted = ctx.service.delete_last_room().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}

/// Handle `lab characters`.
pub async fn characters(
    action: &CharacterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    let updated = match action {
        CharacterCommands::Update => service.update_characters().await?,
        CharacterCommands::Fuse { first, second } => {
            let first = service.get_character(*first).await?;
            let second = service.get_character(*second).await?;
            return output(&service.fuse_characters(&first, &second).await?, flags.format);
        }
        CharacterCommands::GrandDexterity => service.grand_dexterity().await?,
        CharacterCommands::GrandIntelligence => service.grand_intelligence().await?,
        CharacterCommands::GrandStrength => service.grand_strength().await?,
        CharacterCommands::Delete => {
            let deleted = service.delete_characters().await?;
            return output(&json!({ "deleted": deleted }), flags.format);
        }
    };
    output(&json!({ "updated": updated }), flags.format)
}
