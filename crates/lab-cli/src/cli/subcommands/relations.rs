use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum GalleryCommands {
    /// The highest-rated art work.
    HighestRated,
    /// Delete art works with a negative rating.
    DeleteNegative,
    /// The most expensive laptop.
    MostExpensiveLaptop,
}

#[derive(Clone, Debug, Subcommand)]
pub enum GarageCommands {
    /// Owner and registration number of a vehicle.
    Details { vehicle_id: i64 },
    /// Delete an owner together with their vehicles.
    DeleteOwner { owner_id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ZooCommands {
    /// Describe an animal and its conservation status.
    Info { animal_id: i64 },
    /// Animals managed by a keeper.
    Keeper { keeper_id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum HeroCommands {
    /// Heroes of one class, e.g. `TimeMage`.
    ByClass { class: String },
    /// Heroes of one family, e.g. `Mage`.
    ByFamily { family: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum MessageCommands {
    /// Messages received by a user.
    Inbox { receiver_id: i64 },
    /// Mark a message as read.
    Read { message_id: i64 },
    /// Reply to a message.
    Reply { message_id: i64, content: String },
    /// Forward a message to another user.
    Forward { message_id: i64, receiver_id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CardCommands {
    /// Store a credit card; only the masked number is kept.
    Register { owner: String, number: String },
    /// Enroll a learner, coercing the raw student ID.
    Enroll {
        name: String,
        #[arg(allow_hyphen_values = true)]
        student_id: String,
    },
}
