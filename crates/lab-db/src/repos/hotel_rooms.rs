//! Hotel room repository.

use lab_core::entities::{HotelRoom, NewHotelRoom};
use lab_core::enums::RoomType;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_bool, get_decimal, parse_enum};
use crate::service::LabService;
use crate::updates::SetClauses;
use crate::updates::hotel_room::HotelRoomUpdate;

const SELECT_COLS: &str =
    "id, room_number, room_type, capacity, amenities, price_per_night, is_reserved";

fn row_to_hotel_room(row: &libsql::Row) -> Result<HotelRoom, DatabaseError> {
    Ok(HotelRoom {
        id: row.get(0)?,
        room_number: row.get(1)?,
        room_type: parse_enum(&row.get::<String>(2)?)?,
        capacity: row.get(3)?,
        amenities: row.get(4)?,
        price_per_night: get_decimal(row, 5)?,
        is_reserved: get_bool(row, 6)?,
    })
}

impl LabService {
    pub async fn create_hotel_room(&self, new: &NewHotelRoom) -> Result<HotelRoom, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO hotel_rooms
                 (room_number, room_type, capacity, amenities, price_per_night, is_reserved)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    new.room_number,
                    new.room_type.as_str(),
                    new.capacity,
                    new.amenities.as_str(),
                    new.price_per_night.to_string(),
                    i64::from(new.is_reserved)
                ],
            )
            .await?;
        Ok(HotelRoom {
            id,
            room_number: new.room_number,
            room_type: new.room_type,
            capacity: new.capacity,
            amenities: new.amenities.clone(),
            price_per_night: new.price_per_night,
            is_reserved: new.is_reserved,
        })
    }

    pub async fn get_hotel_room(&self, id: i64) -> Result<HotelRoom, DatabaseError> {
        self.find_hotel_room(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("HotelRoom", id))
    }

    async fn find_hotel_room(&self, id: i64) -> Result<Option<HotelRoom>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hotel_rooms WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next().await?.map(|row| row_to_hotel_room(&row)).transpose()
    }

    pub async fn get_hotel_room_by_number(
        &self,
        room_number: i64,
    ) -> Result<HotelRoom, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hotel_rooms WHERE room_number = ?1"),
                [room_number],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("HotelRoom", room_number))?;
        row_to_hotel_room(&row)
    }

    pub async fn list_hotel_rooms(&self) -> Result<Vec<HotelRoom>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM hotel_rooms ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_hotel_room).await
    }

    /// Apply a partial update after validating the merged room.
    pub async fn update_hotel_room(
        &self,
        id: i64,
        update: HotelRoomUpdate,
    ) -> Result<HotelRoom, DatabaseError> {
        let current = self.get_hotel_room(id).await?;
        Self::check(&NewHotelRoom {
            room_number: current.room_number,
            room_type: update.room_type.unwrap_or(current.room_type),
            capacity: update.capacity.unwrap_or(current.capacity),
            amenities: update.amenities.clone().unwrap_or(current.amenities),
            price_per_night: update.price_per_night.unwrap_or(current.price_per_night),
            is_reserved: update.is_reserved.unwrap_or(current.is_reserved),
        })?;

        let mut sets = SetClauses::default();
        if let Some(room_type) = update.room_type {
            sets.push("room_type", room_type.as_str());
        }
        if let Some(capacity) = update.capacity {
            sets.push("capacity", capacity);
        }
        if let Some(amenities) = update.amenities {
            sets.push("amenities", amenities);
        }
        if let Some(price) = update.price_per_night {
            sets.push("price_per_night", price.to_string());
        }
        if let Some(is_reserved) = update.is_reserved {
            sets.push("is_reserved", i64::from(is_reserved));
        }
        if sets.is_empty() {
            return self.get_hotel_room(id).await;
        }

        let (sql, params) = sets.into_update("hotel_rooms", id);
        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_hotel_room(id).await
    }

    /// Deluxe rooms with an even id, one price line each.
    pub async fn get_deluxe_rooms(&self) -> Result<String, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM hotel_rooms
                     WHERE room_type = ?1 AND id % 2 = 0 ORDER BY id"
                ),
                [RoomType::Deluxe.as_str()],
            )
            .await?;
        Ok(collect_rows(rows, row_to_hotel_room)
            .await?
            .iter()
            .map(HotelRoom::price_line)
            .collect())
    }

    /// Grow every reserved room, in id order, by the capacity of the room
    /// with the preceding id (or by its own id when there is none).
    ///
    /// Each room reads its predecessor after earlier rooms were written, so
    /// growth chains through consecutive reserved rooms.
    pub async fn increase_room_capacity(&self) -> Result<usize, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hotel_rooms WHERE is_reserved = 1 ORDER BY id"),
                (),
            )
            .await?;
        let reserved = collect_rows(rows, row_to_hotel_room).await?;
        for room in &reserved {
            let increment = match self.find_hotel_room(room.id - 1).await? {
                Some(previous) => previous.capacity,
                None => room.id,
            };
            self.db()
                .execute(
                    "UPDATE hotel_rooms SET capacity = capacity + ?1 WHERE id = ?2",
                    libsql::params![increment, room.id],
                )
                .await?;
        }
        tracing::info!(count = reserved.len(), "room capacities increased");
        Ok(reserved.len())
    }

    /// Reserve the room with the lowest id. `None` when there are no rooms.
    pub async fn reserve_first_room(&self) -> Result<Option<HotelRoom>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hotel_rooms ORDER BY id LIMIT 1"),
                (),
            )
            .await?;
        let Some(row) = rows.next().await? else {
            tracing::warn!("no hotel room to reserve");
            return Ok(None);
        };
        let mut room = row_to_hotel_room(&row)?;
        self.db()
            .execute("UPDATE hotel_rooms SET is_reserved = 1 WHERE id = ?1", [room.id])
            .await?;
        room.is_reserved = true;
        Ok(Some(room))
    }

    /// Delete the room with the highest id unless it is reserved.
    pub async fn delete_last_room(&self) -> Result<bool, DatabaseError> {
        let removed = self
            .db()
            .execute(
                "DELETE FROM hotel_rooms
                 WHERE id = (SELECT MAX(id) FROM hotel_rooms) AND is_reserved = 0",
                (),
            )
            .await?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;
    use crate::updates::hotel_room::HotelRoomUpdateBuilder;

    fn room(number: i64, room_type: RoomType, capacity: i64, reserved: bool) -> NewHotelRoom {
        NewHotelRoom {
            room_number: number,
            room_type,
            capacity,
            amenities: "TV".into(),
            price_per_night: "100.00".parse().unwrap(),
            is_reserved: reserved,
        }
    }

    #[tokio::test]
    async fn deluxe_rooms_with_even_id() {
        let svc = test_service().await;
        svc.create_hotel_room(&room(101, RoomType::Deluxe, 2, false)).await.unwrap();
        svc.create_hotel_room(&room(102, RoomType::Deluxe, 2, false)).await.unwrap();
        svc.create_hotel_room(&room(103, RoomType::Standard, 2, false)).await.unwrap();
        svc.create_hotel_room(&room(104, RoomType::Deluxe, 2, false)).await.unwrap();
        assert_eq!(
            svc.get_deluxe_rooms().await.unwrap(),
            "\nDeluxe room with number 102 costs 100.00$ per night!\
             \nDeluxe room with number 104 costs 100.00$ per night!"
        );
    }

    #[tokio::test]
    async fn capacity_grows_from_previous_room() {
        let svc = test_service().await;
        svc.create_hotel_room(&room(1, RoomType::Standard, 3, true)).await.unwrap();
        svc.create_hotel_room(&room(2, RoomType::Standard, 4, true)).await.unwrap();
        svc.create_hotel_room(&room(3, RoomType::Standard, 5, false)).await.unwrap();
        assert_eq!(svc.increase_room_capacity().await.unwrap(), 2);

        let rooms = svc.list_hotel_rooms().await.unwrap();
        // id 1 has no predecessor: 3 + 1; id 2 reads the updated id 1: 4 + 4
        assert_eq!(rooms[0].capacity, 4);
        assert_eq!(rooms[1].capacity, 8);
        assert_eq!(rooms[2].capacity, 5);
    }

    #[tokio::test]
    async fn reserved_last_room_is_kept() {
        let svc = test_service().await;
        assert!(svc.reserve_first_room().await.unwrap().is_none());
        svc.create_hotel_room(&room(401, RoomType::Suite, 2, false)).await.unwrap();
        let first = svc.reserve_first_room().await.unwrap().unwrap();
        assert!(first.is_reserved);
        assert!(svc.get_hotel_room_by_number(401).await.unwrap().is_reserved);

        assert!(!svc.delete_last_room().await.unwrap());
        svc.create_hotel_room(&room(402, RoomType::Suite, 2, false)).await.unwrap();
        assert!(svc.delete_last_room().await.unwrap());
        assert_eq!(svc.list_hotel_rooms().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_update_is_validated() {
        let svc = test_service().await;
        let created = svc
            .create_hotel_room(&room(7, RoomType::Standard, 2, false))
            .await
            .unwrap();

        let update = HotelRoomUpdateBuilder::new().capacity(0).build();
        let err = svc.update_hotel_room(created.id, update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let update = HotelRoomUpdateBuilder::new()
            .room_type(RoomType::Suite)
            .amenities("TV, Minibar")
            .build();
        let updated = svc.update_hotel_room(created.id, update).await.unwrap();
        assert_eq!(updated.room_type, RoomType::Suite);
        assert_eq!(updated.amenities, "TV, Minibar");
        assert_eq!(updated.capacity, 2);
    }

    #[tokio::test]
    async fn duplicate_room_number_rejected() {
        let svc = test_service().await;
        svc.create_hotel_room(&room(5, RoomType::Standard, 2, false)).await.unwrap();
        let err = svc
            .create_hotel_room(&room(5, RoomType::Suite, 2, false))
            .await
            .unwrap_err();
        let DatabaseError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors.has_field("room_number"));
    }
}
