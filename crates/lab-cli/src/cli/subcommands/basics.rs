use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum PetCommands {
    /// Create a pet.
    Create { name: String, species: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ArtifactCommands {
    /// Rename a magical artifact older than 250 years.
    Rename { name: String, new_name: String },
    /// Delete every artifact.
    DeleteAll,
}

#[derive(Clone, Debug, Subcommand)]
pub enum LocationCommands {
    /// Print every location with its population.
    Show,
    /// Mark the first location as a capital.
    NewCapital,
    /// Names of capital locations.
    Capitals,
    /// Delete the first location.
    DeleteFirst,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CarCommands {
    /// Recompute every discounted price.
    ApplyDiscount,
    /// Models and discounted prices of cars newer than 2020.
    Recent,
    /// Delete the last car.
    DeleteLast,
}

#[derive(Clone, Debug, Subcommand)]
pub enum TodoCommands {
    /// Print every unfinished task with its due date.
    Unfinished,
    /// Finish every task with an odd id.
    CompleteOdd,
    /// Decode `text` and store it as the description of `title`.
    Encode { text: String, title: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum RoomCommands {
    /// Deluxe rooms with an even id.
    Deluxe,
    /// Grow the capacity of every reserved room.
    IncreaseCapacity,
    /// Reserve the first room.
    ReserveFirst,
    /// Delete the last room unless it is reserved.
    DeleteLast,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CharacterCommands {
    /// Apply the per-class stat changes.
    Update,
    /// Fuse two characters into one.
    Fuse { first: i64, second: i64 },
    /// Set every dexterity to 30.
    GrandDexterity,
    /// Set every intelligence to 40.
    GrandIntelligence,
    /// Set every strength to 50.
    GrandStrength,
    /// Delete characters with an empty inventory.
    Delete,
}
