use chrono::NaiveDate;
use clap::Subcommand;
use lab_core::enums::{Genre, Priority, PropertyType};
use rust_decimal::Decimal;

#[derive(Clone, Debug, Subcommand)]
pub enum ListingCommands {
    ByType { property_type: PropertyType },
    /// Listings priced within `[min, max]`.
    PriceRange { min: Decimal, max: Decimal },
    Bedrooms { count: i64 },
    /// The two locations with the most listings.
    Popular,
}

#[derive(Clone, Debug, Subcommand)]
pub enum GameCommands {
    ByGenre { genre: Genre },
    /// Games released in `year` or later.
    Recent { year: i64 },
    Highest,
    Lowest,
    Average,
}

#[derive(Clone, Debug, Subcommand)]
pub enum InvoiceCommands {
    Prefix { prefix: String },
    Sorted,
    /// An invoice with its billing address.
    Billing { invoice_number: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum PortfolioCommands {
    /// Programmers on a project, with all their projects and technologies.
    Programmers { project_id: i64 },
    /// Projects of a programmer, with their technologies.
    Projects { programmer_id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    Ongoing,
    CompletedMid,
    Search { query: String },
    /// Completed tasks finished at most `days` before creation.
    Recent { days: i64 },
    /// Update a task.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        completed: Option<bool>,
        #[arg(long)]
        completion_date: Option<NaiveDate>,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ExerciseCommands {
    LongAndHard,
    ShortAndEasy,
    /// Exercises lasting between `min` and `max` minutes.
    Duration { min: i64, max: i64 },
    DifficultyReps { difficulty: i64, repetitions: i64 },
}
