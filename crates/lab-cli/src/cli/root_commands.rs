use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, ArtifactCommands, CardCommands, CarCommands, CharacterCommands,
    ExerciseCommands, GalleryCommands, GameCommands, GarageCommands, HeroCommands,
    HotelCommands, InvoiceCommands, ListingCommands, LocationCommands, MessageCommands,
    PetCommands, PortfolioCommands, RestaurantCommands, RoomCommands, StudentCommands,
    TaskCommands, TodoCommands, ZooCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create any entity from a JSON payload.
    Create(CreateArgs),
    /// List stored rows of an entity.
    List(ListArgs),
    /// Student registry.
    Students {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Pets.
    Pets {
        #[command(subcommand)]
        action: PetCommands,
    },
    /// Artifacts.
    Artifacts {
        #[command(subcommand)]
        action: ArtifactCommands,
    },
    /// Locations.
    Locations {
        #[command(subcommand)]
        action: LocationCommands,
    },
    /// Cars.
    Cars {
        #[command(subcommand)]
        action: CarCommands,
    },
    /// Todo tasks.
    Todos {
        #[command(subcommand)]
        action: TodoCommands,
    },
    /// Hotel rooms (standalone exercise).
    Rooms {
        #[command(subcommand)]
        action: RoomCommands,
    },
    /// Game characters.
    Characters {
        #[command(subcommand)]
        action: CharacterCommands,
    },
    /// Art works and laptops.
    Gallery {
        #[command(subcommand)]
        action: GalleryCommands,
    },
    /// Owners, vehicles and registrations.
    Garage {
        #[command(subcommand)]
        action: GarageCommands,
    },
    /// Animals and keepers.
    Zoo {
        #[command(subcommand)]
        action: ZooCommands,
    },
    /// Heroes.
    Heroes {
        #[command(subcommand)]
        action: HeroCommands,
    },
    /// User messages.
    Messages {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// Custom field codecs: credit cards and learners.
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
    /// Hotel rooms and reservations.
    Hotel {
        #[command(subcommand)]
        action: HotelCommands,
    },
    /// Restaurants, menus and reviews.
    Restaurants {
        #[command(subcommand)]
        action: RestaurantCommands,
    },
    /// Real estate listing queries.
    Listings {
        #[command(subcommand)]
        action: ListingCommands,
    },
    /// Video game queries.
    Games {
        #[command(subcommand)]
        action: GameCommands,
    },
    /// Invoice queries.
    Invoices {
        #[command(subcommand)]
        action: InvoiceCommands,
    },
    /// Programmers, projects and technologies.
    Portfolio {
        #[command(subcommand)]
        action: PortfolioCommands,
    },
    /// Planner tasks.
    Tasks {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Exercise queries.
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommands,
    },
    /// Read-only admin views.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Print the JSON schema of a stored entity.
    Schema(SchemaArgs),
    /// Zip the project files for submission.
    Pack(PackArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Entity key, e.g. `video_game` or `hotel_room`.
    pub entity: String,
    /// JSON payload of the new entity.
    pub payload: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub entity: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: String,
}

#[derive(Clone, Debug, Args)]
pub struct PackArgs {
    /// Project folder; prompted for when omitted.
    pub dir: Option<String>,
}
