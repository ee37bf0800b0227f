use lab_db::updates::task::TaskUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    ExerciseCommands, GameCommands, InvoiceCommands, ListingCommands, PortfolioCommands,
    TaskCommands,
};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lab listings`.
pub async fn listings(
    action: &ListingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    let listings = match action {
        ListingCommands::ByType { property_type } => {
            service.by_property_type(*property_type).await?
        }
        ListingCommands::PriceRange { min, max } => service.in_price_range(*min, *max).await?,
        ListingCommands::Bedrooms { count } => service.with_bedrooms(*count).await?,
        ListingCommands::Popular => {
            return output(&service.popular_locations().await?, flags.format);
        }
    };
    let limit = effective_limit(flags.limit, flags.default_limit);
    output(&truncate(listings, limit), flags.format)
}

/// Handle `lab games`.
pub async fn games(action: &GameCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        GameCommands::ByGenre { genre } => output(&service.games_by_genre(*genre).await?, flags.format),
        GameCommands::Recent { year } => {
            output(&service.recently_released_games(*year).await?, flags.format)
        }
        GameCommands::Highest => output(&service.highest_rated_game().await?, flags.format),
        GameCommands::Lowest => output(&service.lowest_rated_game().await?, flags.format),
        GameCommands::Average => {
            let average = service.average_rating().await?;
            output(&json!({ "average_rating": average }), flags.format)
        }
    }
}

/// Handle `lab invoices`.
pub async fn invoices(
    action: &InvoiceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        InvoiceCommands::Prefix { prefix } => {
            output(&service.get_invoices_with_prefix(prefix).await?, flags.format)
        }
        InvoiceCommands::Sorted => {
            output(&service.get_invoices_sorted_by_number().await?, flags.format)
        }
        InvoiceCommands::Billing { invoice_number } => output(
            &service.get_invoice_with_billing_info(invoice_number).await?,
            flags.format,
        ),
    }
}

/// Handle `lab portfolio`.
pub async fn portfolio(
    action: &PortfolioCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PortfolioCommands::Programmers { project_id } => output(
            &ctx.service.get_programmers_with_technologies(*project_id).await?,
            flags.format,
        ),
        PortfolioCommands::Projects { programmer_id } => output(
            &ctx.service.get_projects_with_technologies(*programmer_id).await?,
            flags.format,
        ),
    }
}

/// Handle `lab tasks`.
pub async fn tasks(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = &ctx.service;
    let tasks = match action {
        TaskCommands::Ongoing => service.ongoing_high_priority_tasks().await?,
        TaskCommands::CompletedMid => service.completed_mid_priority_tasks().await?,
        TaskCommands::Search { query } => service.search_tasks(query).await?,
        TaskCommands::Recent { days } => service.recent_completed_tasks(*days).await?,
        TaskCommands::Update {
            id,
            title,
            description,
            priority,
            completed,
            completion_date,
        } => {
            let mut builder = TaskUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(priority) = priority {
                builder = builder.priority(*priority);
            }
            if let Some(completed) = completed {
                builder = builder.is_completed(*completed);
            }
            if let Some(date) = completion_date {
                builder = builder.completion_date(*date);
            }
            return output(&service.update_task(*id, builder.build()).await?, flags.format);
        }
    };
    let limit = effective_limit(flags.limit, flags.default_limit);
    output(&truncate(tasks, limit), flags.format)
}

/// Handle `lab exercises`.
pub async fn exercises(
    action: &ExerciseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    let exercises = match action {
        ExerciseCommands::LongAndHard => service.get_long_and_hard_exercises().await?,
        ExerciseCommands::ShortAndEasy => service.get_short_and_easy_exercises().await?,
        ExerciseCommands::Duration { min, max } => {
            service.get_exercises_within_duration(*min, *max).await?
        }
        ExerciseCommands::DifficultyReps {
            difficulty,
            repetitions,
        } => {
            service
                .get_exercises_with_difficulty_and_repetitions(*difficulty, *repetitions)
                .await?
        }
    };
    let limit = effective_limit(flags.limit, flags.default_limit);
    output(&truncate(exercises, limit), flags.format)
}
