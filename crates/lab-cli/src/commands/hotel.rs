use lab_core::entities::NewReservation;
use lab_core::enums::ReservationKind;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{HotelCommands, RestaurantCommands};
use crate::context::AppContext;
use crate::output::{message, output};

/// Handle `lab hotel`.
pub async fn hotel(action: &HotelCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        HotelCommands::Reserve {
            room,
            start,
            end,
            special,
        } => {
            let room = service.get_room_by_number(room).await?;
            let kind = if *special {
                ReservationKind::Special
            } else {
                ReservationKind::Regular
            };
            let reservation = service
                .book_reservation(&NewReservation {
                    room_id: room.id,
                    start_date: *start,
                    end_date: *end,
                    kind,
                })
                .await?;
            output(&reservation, flags.format)
        }
        HotelCommands::Extend {
            reservation_id,
            days,
        } => {
            let mut reservation = service.get_reservation(*reservation_id).await?;
            message(
                &service.extend_reservation(&mut reservation, *days).await?,
                flags.format,
            )
        }
        HotelCommands::Cost { reservation_id } => {
            let reservation = service.get_reservation(*reservation_id).await?;
            let total = service.reservation_total_cost(&reservation).await?;
            output(
                &json!({
                    "reservation_id": reservation.id,
                    "nights": reservation.reservation_period(),
                    "total_cost": total.to_string(),
                }),
                flags.format,
            )
        }
        HotelCommands::Overlapping {
            reservation_id,
            start,
            end,
        } => {
            let reservation = service.get_reservation(*reservation_id).await?;
            output(
                &service
                    .get_overlapping_reservations(&reservation, *start, *end)
                    .await?,
                flags.format,
            )
        }
    }
}

/// Handle `lab restaurants`.
pub async fn restaurants(
    action: &RestaurantCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        RestaurantCommands::Reviews { restaurant_id } => {
            output(&service.restaurant_reviews(*restaurant_id).await?, flags.format)
        }
        RestaurantCommands::Menus { restaurant_id } => {
            output(&service.menus_for(*restaurant_id).await?, flags.format)
        }
        RestaurantCommands::MenuReviews { menu_id } => {
            output(&service.menu_reviews(*menu_id).await?, flags.format)
        }
        RestaurantCommands::Delete { restaurant_id } => {
            service.delete_restaurant(*restaurant_id).await?;
            message(&format!("Restaurant {restaurant_id} deleted"), flags.format)
        }
    }
}
