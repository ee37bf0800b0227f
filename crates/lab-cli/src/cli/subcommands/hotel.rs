use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum HotelCommands {
    /// Reserve a room for `[start, end]`.
    Reserve {
        /// Room number.
        room: String,
        start: NaiveDate,
        end: NaiveDate,
        /// Make a special (extendable) reservation.
        #[arg(long)]
        special: bool,
    },
    /// Extend a special reservation.
    Extend { reservation_id: i64, days: u64 },
    /// Total cost of a reservation.
    Cost { reservation_id: i64 },
    /// Reservations of the same room overlapping `[start, end]`.
    Overlapping {
        reservation_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum RestaurantCommands {
    /// Reviews of a restaurant, best first.
    Reviews { restaurant_id: i64 },
    /// Menus of a restaurant.
    Menus { restaurant_id: i64 },
    /// Reviews of a menu.
    MenuReviews { menu_id: i64 },
    /// Delete a restaurant with its menus and reviews.
    Delete { restaurant_id: i64 },
}
