//! Integration tests for the cross-cutting guarantees of the persistence layer:
//! - range violations are rejected and never persisted
//! - reservations for one room never overlap
//! - card numbers are only ever stored masked
//! - create then fetch returns every field, also across a reopen
//! - room capacity is checked before any insert

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use lab_core::entities::{
    NewHotel, NewReservation, NewRoom, NewStudent, NewTask, NewVideoGame, OVER_CAPACITY,
};
use lab_core::enums::{Genre, Priority, ReservationKind};
use lab_db::error::DatabaseError;
use lab_db::service::LabService;

async fn test_service() -> LabService {
    LabService::new_local(":memory:").await.unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

async fn room(svc: &LabService, number: &str) -> i64 {
    let hotel = svc
        .create_hotel(&NewHotel {
            name: "Grand".into(),
            address: "1 Vitosha Blvd".into(),
        })
        .await
        .unwrap();
    svc.insert_room(&NewRoom {
        hotel_id: hotel.id,
        number: number.into(),
        capacity: 2,
        total_guests: 2,
        price_per_night: dec("80.00"),
    })
    .await
    .unwrap()
    .id
}

fn stay(room_id: i64, start: &str, end: &str, kind: ReservationKind) -> NewReservation {
    NewReservation {
        room_id,
        start_date: date(start),
        end_date: date(end),
        kind,
    }
}

// ---------------------------------------------------------------------------
// Validation before persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn range_violation_is_never_persisted() {
    let svc = test_service().await;
    let result = svc
        .create_video_game(&NewVideoGame {
            title: "Future Game".into(),
            genre: Genre::Strategy,
            release_year: 2030,
            rating: dec("5.0"),
        })
        .await;
    assert!(matches!(result, Err(DatabaseError::Validation(_))));
    assert_eq!(svc.db().count("video_games").await.unwrap(), 0);
}

#[tokio::test]
async fn room_over_capacity_is_rejected_before_insert() {
    let svc = test_service().await;
    let hotel = svc
        .create_hotel(&NewHotel {
            name: "Small".into(),
            address: String::new(),
        })
        .await
        .unwrap();
    let err = svc
        .create_room(&NewRoom {
            hotel_id: hotel.id,
            number: "101".into(),
            capacity: 2,
            total_guests: 3,
            price_per_night: dec("50.00"),
        })
        .await
        .unwrap_err();
    let DatabaseError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.messages_for("total_guests"), vec![OVER_CAPACITY]);
    assert_eq!(svc.db().count("rooms").await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reservations_for_one_room_never_overlap() {
    let svc = test_service().await;
    let room_id = room(&svc, "201").await;

    let first = svc
        .create_reservation(&stay(room_id, "2024-05-01", "2024-05-05", ReservationKind::Regular))
        .await
        .unwrap();
    assert_eq!(first, "Regular reservation for room 201");

    // Touching end date counts as overlap; so does a different kind.
    for (start, end, kind) in [
        ("2024-05-05", "2024-05-07", ReservationKind::Regular),
        ("2024-04-28", "2024-05-02", ReservationKind::Special),
    ] {
        let err = svc
            .create_reservation(&stay(room_id, start, end, kind))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Room 201 cannot be reserved");
    }

    let special = svc
        .create_reservation(&stay(room_id, "2024-05-06", "2024-05-08", ReservationKind::Special))
        .await
        .unwrap();
    assert_eq!(special, "Special reservation for room 201");
    assert_eq!(svc.db().count("reservations").await.unwrap(), 2);
}

#[tokio::test]
async fn extension_into_another_stay_fails() {
    let svc = test_service().await;
    let room_id = room(&svc, "301").await;
    let mut special = svc
        .book_reservation(&stay(room_id, "2024-06-01", "2024-06-03", ReservationKind::Special))
        .await
        .unwrap();
    svc.book_reservation(&stay(room_id, "2024-06-10", "2024-06-12", ReservationKind::Regular))
        .await
        .unwrap();

    let message = svc.extend_reservation(&mut special, 3).await.unwrap();
    assert_eq!(message, "Extended reservation for room 301 with 3 days");
    assert_eq!(special.end_date, date("2024-06-06"));

    assert!(svc.extend_reservation(&mut special, 5).await.is_err());
    let stored = svc.get_reservation(special.id).await.unwrap();
    assert_eq!(stored.end_date, date("2024-06-06"));
}

// ---------------------------------------------------------------------------
// Custom fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_card_numbers_are_masked() {
    let svc = test_service().await;
    svc.register_credit_card("Ivan Ivanov", "4000123412345678")
        .await
        .unwrap();

    let mut rows = svc
        .db()
        .conn()
        .query("SELECT card_number FROM credit_cards", ())
        .await
        .unwrap();
    let row = rows.next().await.unwrap().unwrap();
    let stored: String = row.get(0).unwrap();
    assert_eq!(stored, "****-****-****-5678");

    let cards = svc.list_credit_cards().await.unwrap();
    assert_eq!(cards[0].card_number.last_four(), "5678");
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_fetch_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lab.db");
    let path = path.to_str().unwrap();

    let created = {
        let svc = LabService::new_local(path).await.unwrap();
        svc.create_student(&NewStudent {
            student_id: "FC9999".into(),
            first_name: "Maria".into(),
            last_name: "Georgieva".into(),
            birth_date: Some(date("1999-09-09")),
            email: "maria.georgieva@university.com".into(),
        })
        .await
        .unwrap()
    };

    let svc = LabService::new_local(path).await.unwrap();
    assert_eq!(svc.get_student("FC9999").await.unwrap(), created);
}

#[tokio::test]
async fn task_queries_partition_by_priority() {
    let svc = test_service().await;
    let high = svc
        .create_task(&NewTask {
            title: "Release".into(),
            description: "Cut the release branch".into(),
            priority: Priority::High,
            is_completed: false,
            creation_date: date("2024-01-01"),
            completion_date: date("2024-01-15"),
        })
        .await
        .unwrap();
    let medium = svc
        .create_task(&NewTask {
            title: "Docs".into(),
            description: "Update the changelog".into(),
            priority: Priority::Medium,
            is_completed: true,
            creation_date: date("2024-01-01"),
            completion_date: date("2024-01-02"),
        })
        .await
        .unwrap();

    assert_eq!(svc.ongoing_high_priority_tasks().await.unwrap(), vec![high]);
    assert_eq!(svc.completed_mid_priority_tasks().await.unwrap(), vec![medium]);
}
