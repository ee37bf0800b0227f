//! Entity structs for every ormlab exercise domain.
//!
//! Each persisted entity comes in two shapes: `X` (a stored row, carrying its
//! database `id`) and `NewX` (the payload for an insert, which implements
//! [`Validate`](crate::validation::Validate)). All structs derive `Serialize`,
//! `Deserialize` and `JsonSchema` for JSON output and schema validation.

mod artifact;
mod car;
mod character;
mod credit_card;
mod exercise;
mod gallery;
mod garage;
mod hero;
mod hotel;
mod hotel_room;
mod invoice;
mod learner;
mod listing;
mod location;
mod messaging;
mod pet;
mod portfolio;
mod product;
mod restaurant;
mod student;
mod task;
mod todo;
mod video_game;
mod worker;
mod zoo;

pub use artifact::{Artifact, NewArtifact, RENAME_MIN_AGE};
pub use car::{Car, CarPrice, NewCar};
pub use character::{Character, EMPTY_INVENTORY, NewCharacter, fuse};
pub use credit_card::{CreditCard, NewCreditCard};
pub use exercise::{Exercise, NewExercise};
pub use gallery::{Artwork, Laptop, NewArtwork, NewLaptop};
pub use garage::{NewOwner, NewRegistration, NewVehicle, Owner, Registration, Vehicle, car_details};
pub use hero::{
    AssassinTraits, DemonHunterTraits, FelbladeDemonHunterTraits, Hero, HeroKind, MageTraits,
    NecromancerTraits, NewHero, ShadowbladeAssassinTraits, TimeMageTraits,
    VengeanceDemonHunterTraits, ViperAssassinTraits,
};
pub use hotel::{
    Hotel, INVALID_PERIOD, NewHotel, NewReservation, NewRoom, OVER_CAPACITY, Reservation, Room,
};
pub use hotel_room::{HotelRoom, NewHotelRoom};
pub use invoice::{BillingInfo, Invoice, InvoiceWithBilling, NewBillingInfo, NewInvoice};
pub use learner::{Learner, NewLearner};
pub use listing::{LocationCount, NewRealEstateListing, RealEstateListing};
pub use location::{Location, NewLocation};
pub use messaging::{Message, NewMessage, NewUserProfile, UserProfile};
pub use pet::{NewPet, Pet};
pub use portfolio::{
    NewProgrammer, NewProject, NewTechnology, Programmer, ProgrammerProfile, Project,
    ProjectWithTechnologies, Technology,
};
pub use product::{NewProduct, Product};
pub use restaurant::{
    MENU_CATEGORIES, Menu, MenuReview, NewMenu, NewMenuReview, NewRestaurant,
    NewRestaurantReview, Restaurant, RestaurantReview, RestaurantReviewKind, ReviewFields,
};
pub use student::{NewStudent, Student};
pub use task::{NewTask, Task};
pub use todo::{NewTodo, Todo, decode_shifted};
pub use video_game::{NewVideoGame, RATING_MESSAGE, RELEASE_YEAR_MESSAGE, VideoGame};
pub use worker::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME, NewWorker, Worker};
pub use zoo::{
    Animal, AnimalKind, EmployeeFields, NewAnimal, NewVeterinarian, NewZooKeeper, Veterinarian,
    ZooKeeper,
};
