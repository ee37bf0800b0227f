mod admin;
mod basics;
mod hotel;
mod managers;
mod relations;
mod students;

pub use admin::AdminCommands;
pub use basics::{
    ArtifactCommands, CarCommands, CharacterCommands, LocationCommands, PetCommands,
    RoomCommands, TodoCommands,
};
pub use hotel::{HotelCommands, RestaurantCommands};
pub use managers::{
    ExerciseCommands, GameCommands, InvoiceCommands, ListingCommands, PortfolioCommands,
    TaskCommands,
};
pub use relations::{
    CardCommands, GalleryCommands, GarageCommands, HeroCommands, MessageCommands, ZooCommands,
};
pub use students::StudentCommands;
