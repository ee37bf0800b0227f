use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    CardCommands, GalleryCommands, GarageCommands, HeroCommands, MessageCommands, ZooCommands,
};
use crate::commands::shared::parse::student_id_input;
use crate::context::AppContext;
use crate::output::{message, output};

/// Handle `lab gallery`.
pub async fn gallery(
    action: &GalleryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GalleryCommands::HighestRated => {
            output(&ctx.service.show_highest_rated_art().await?, flags.format)
        }
        GalleryCommands::DeleteNegative => {
            let deleted = ctx.service.delete_negative_rated_arts().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
        GalleryCommands::MostExpensiveLaptop => {
            output(&ctx.service.show_the_most_expensive_laptop().await?, flags.format)
        }
    }
}

/// Handle `lab garage`.
pub async fn garage(
    action: &GarageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GarageCommands::Details { vehicle_id } => {
            let vehicle = ctx.service.get_vehicle(*vehicle_id).await?;
            let owner = match vehicle.owner_id {
                Some(owner_id) => Some(ctx.service.get_owner(owner_id).await?),
                None => None,
            };
            let registration = ctx.service.registration_for_vehicle(vehicle.id).await?;
            let car_details = ctx.service.vehicle_car_details(&vehicle).await?;
            output(
                &json!({
                    "vehicle": vehicle,
                    "owner": owner,
                    "registration": registration,
                    "car_details": car_details,
                }),
                flags.format,
            )
        }
        GarageCommands::DeleteOwner { owner_id } => {
            ctx.service.delete_owner(*owner_id).await?;
            message(&format!("Owner {owner_id} deleted"), flags.format)
        }
    }
}

/// Handle `lab zoo`.
pub async fn zoo(action: &ZooCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ZooCommands::Info { animal_id } => {
            let animal = ctx.service.get_animal(*animal_id).await?;
            let text = format!("{}\n{}", animal.display_info(), animal.is_endangered());
            message(&text, flags.format)
        }
        ZooCommands::Keeper { keeper_id } => {
            output(&ctx.service.managed_animals(*keeper_id).await?, flags.format)
        }
    }
}

/// Handle `lab heroes`.
pub async fn heroes(action: &HeroCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let heroes = match action {
        HeroCommands::ByClass { class } => ctx.service.heroes_by_class(class).await?,
        HeroCommands::ByFamily { family } => ctx.service.heroes_by_family(family).await?,
    };
    output(&heroes, flags.format)
}

/// Handle `lab messages`.
pub async fn messages(
    action: &MessageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        MessageCommands::Inbox { receiver_id } => {
            output(&service.inbox(*receiver_id).await?, flags.format)
        }
        MessageCommands::Read { message_id } => {
            let mut stored = service.get_message(*message_id).await?;
            service.mark_as_read(&mut stored).await?;
            output(&stored, flags.format)
        }
        MessageCommands::Reply {
            message_id,
            content,
        } => {
            let original = service.get_message(*message_id).await?;
            output(&service.reply_to_message(&original, content).await?, flags.format)
        }
        MessageCommands::Forward {
            message_id,
            receiver_id,
        } => {
            let original = service.get_message(*message_id).await?;
            output(
                &service.forward_message(&original, *receiver_id).await?,
                flags.format,
            )
        }
    }
}

/// Handle `lab cards`.
pub async fn cards(action: &CardCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CardCommands::Register { owner, number } => {
            output(&ctx.service.register_credit_card(owner, number).await?, flags.format)
        }
        CardCommands::Enroll { name, student_id } => {
            let raw = student_id_input(student_id);
            output(&ctx.service.enroll_learner(name, &raw).await?, flags.format)
        }
    }
}
