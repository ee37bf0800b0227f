//! Hotels, rooms and reservations.
//!
//! Regular and special reservations share one table with a `kind` column.
//! A room can never hold two reservations whose date ranges touch, whatever
//! their kind: the overlap check and the write run in one transaction.

use chrono::NaiveDate;
use lab_core::entities::{Hotel, NewHotel, NewReservation, NewRoom, Reservation, Room};
use lab_core::enums::ReservationKind;
use rust_decimal::Decimal;

use crate::error::DatabaseError;
use crate::helpers::{
    collect_rows, finish_transaction, format_date, get_date, get_decimal, parse_enum,
};
use crate::service::LabService;

const ROOM_COLS: &str = "id, hotel_id, number, capacity, total_guests, price_per_night";
const RESERVATION_COLS: &str = "id, room_id, start_date, end_date, kind";

/// Message of the conflict raised when an extension would overlap another stay.
pub const EXTEND_FAILED: &str = "Error during extending reservation";

fn row_to_room(row: &libsql::Row) -> Result<Room, DatabaseError> {
    Ok(Room {
        id: row.get(0)?,
        hotel_id: row.get(1)?,
        number: row.get(2)?,
        capacity: row.get(3)?,
        total_guests: row.get(4)?,
        price_per_night: get_decimal(row, 5)?,
    })
}

fn row_to_reservation(row: &libsql::Row) -> Result<Reservation, DatabaseError> {
    Ok(Reservation {
        id: row.get(0)?,
        room_id: row.get(1)?,
        start_date: get_date(row, 2)?,
        end_date: get_date(row, 3)?,
        kind: parse_enum(&row.get::<String>(4)?)?,
    })
}

/// Reservations of `room_id` sharing at least one day with `[start, end]`,
/// leaving out `exclude` (the reservation being changed).
async fn overlapping(
    conn: &libsql::Connection,
    room_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<i64>,
) -> Result<Vec<Reservation>, DatabaseError> {
    let rows = conn
        .query(
            &format!(
                "SELECT {RESERVATION_COLS} FROM reservations
                 WHERE room_id = ?1 AND end_date >= ?2 AND start_date <= ?3 AND id != ?4
                 ORDER BY id"
            ),
            libsql::params![room_id, format_date(start), format_date(end), exclude.unwrap_or(-1)],
        )
        .await?;
    collect_rows(rows, row_to_reservation).await
}

impl LabService {
    pub async fn create_hotel(&self, new: &NewHotel) -> Result<Hotel, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO hotels (name, address) VALUES (?1, ?2)",
                [new.name.as_str(), new.address.as_str()],
            )
            .await?;
        Ok(Hotel {
            id,
            name: new.name.clone(),
            address: new.address.clone(),
        })
    }

    pub async fn insert_room(&self, new: &NewRoom) -> Result<Room, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO rooms (hotel_id, number, capacity, total_guests, price_per_night)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.hotel_id,
                    new.number.as_str(),
                    new.capacity,
                    new.total_guests,
                    new.price_per_night.to_string()
                ],
            )
            .await?;
        Ok(Room {
            id,
            hotel_id: new.hotel_id,
            number: new.number.clone(),
            capacity: new.capacity,
            total_guests: new.total_guests,
            price_per_night: new.price_per_night,
        })
    }

    /// Validate and store a room, confirming with its number.
    pub async fn create_room(&self, new: &NewRoom) -> Result<String, DatabaseError> {
        let room = self.insert_room(new).await?;
        Ok(format!("Room {} created successfully", room.number))
    }

    pub async fn get_room(&self, id: i64) -> Result<Room, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ROOM_COLS} FROM rooms WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Room", id))?;
        row_to_room(&row)
    }

    pub async fn get_room_by_number(&self, number: &str) -> Result<Room, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ROOM_COLS} FROM rooms WHERE number = ?1"), [number])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Room", number))?;
        row_to_room(&row)
    }

    /// Store a reservation unless it overlaps an existing one for the room.
    pub async fn book_reservation(&self, new: &NewReservation) -> Result<Reservation, DatabaseError> {
        Self::check(new)?;
        let room = self.get_room(new.room_id).await?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            if !overlapping(&tx, room.id, new.start_date, new.end_date, None)
                .await?
                .is_empty()
            {
                return Err(DatabaseError::Conflict(format!(
                    "Room {} cannot be reserved",
                    room.number
                )));
            }
            tx.execute(
                "INSERT INTO reservations (room_id, start_date, end_date, kind)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    room.id,
                    format_date(new.start_date),
                    format_date(new.end_date),
                    new.kind.as_str()
                ],
            )
            .await?;
            Ok::<_, DatabaseError>(tx.last_insert_rowid())
        }
        .await;
        let id = finish_transaction(tx, result).await?;
        tracing::debug!(id, room = %room.number, "reservation stored");
        Ok(Reservation {
            id,
            room_id: room.id,
            start_date: new.start_date,
            end_date: new.end_date,
            kind: new.kind,
        })
    }

    /// Book and confirm with `"{kind} reservation for room {number}"`.
    pub async fn create_reservation(&self, new: &NewReservation) -> Result<String, DatabaseError> {
        let reservation = self.book_reservation(new).await?;
        let room = self.get_room(reservation.room_id).await?;
        Ok(format!("{} reservation for room {}", reservation.kind, room.number))
    }

    pub async fn get_reservation(&self, id: i64) -> Result<Reservation, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RESERVATION_COLS} FROM reservations WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Reservation", id))?;
        row_to_reservation(&row)
    }

    /// Other reservations of the same room that share a day with `[start, end]`.
    pub async fn get_overlapping_reservations(
        &self,
        reservation: &Reservation,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, DatabaseError> {
        overlapping(
            self.db().conn(),
            reservation.room_id,
            start,
            end,
            Some(reservation.id),
        )
        .await
    }

    /// Whether no other reservation of the room overlaps this one.
    pub async fn is_available(&self, reservation: &Reservation) -> Result<bool, DatabaseError> {
        Ok(self
            .get_overlapping_reservations(reservation, reservation.start_date, reservation.end_date)
            .await?
            .is_empty())
    }

    /// Nights times the room's nightly price.
    pub async fn reservation_total_cost(
        &self,
        reservation: &Reservation,
    ) -> Result<Decimal, DatabaseError> {
        let room = self.get_room(reservation.room_id).await?;
        Ok(reservation.calculate_total_cost(room.price_per_night))
    }

    /// Push a special reservation's end date out by `days`.
    ///
    /// Fails with a conflict when the reservation is not special or the
    /// longer stay would overlap another reservation of the room.
    pub async fn extend_reservation(
        &self,
        reservation: &mut Reservation,
        days: u64,
    ) -> Result<String, DatabaseError> {
        if reservation.kind != ReservationKind::Special {
            return Err(DatabaseError::Conflict(format!(
                "Only special reservations can be extended, reservation {} is {}",
                reservation.id, reservation.kind
            )));
        }
        let new_end = reservation
            .extended_end(days)
            .ok_or_else(|| DatabaseError::Conflict(EXTEND_FAILED.to_string()))?;
        let room = self.get_room(reservation.room_id).await?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let clashes = overlapping(
                &tx,
                reservation.room_id,
                reservation.start_date,
                new_end,
                Some(reservation.id),
            )
            .await?;
            if !clashes.is_empty() {
                return Err(DatabaseError::Conflict(EXTEND_FAILED.to_string()));
            }
            tx.execute(
                "UPDATE reservations SET end_date = ?1 WHERE id = ?2",
                libsql::params![format_date(new_end), reservation.id],
            )
            .await?;
            Ok::<_, DatabaseError>(())
        }
        .await;
        finish_transaction(tx, result).await?;

        reservation.end_date = new_end;
        Ok(format!(
            "Extended reservation for room {} with {days} days",
            room.number
        ))
    }
}
