//! Serde roundtrip and JsonSchema validation tests for stored entity types.

use chrono::{NaiveDate, Utc};
use lab_core::entities::*;
use lab_core::enums::*;
use lab_core::fields::{Availability, MaskedCardNumber};
use rust_decimal::Decimal;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    product_roundtrip,
    Product,
    Product {
        id: 1,
        name: "Laptop".into(),
        description: "14 inch".into(),
        category: "Tech".into(),
        price: Decimal::new(129_999, 2),
        barcode: "1234567890".into(),
        supplier: "Acme".into(),
        created_on: Utc::now(),
    }
);

roundtrip_and_validate!(
    student_roundtrip,
    Student,
    Student {
        id: 2,
        student_id: "FE0054".into(),
        first_name: "Jane".into(),
        last_name: "Smith".into(),
        birth_date: None,
        email: "jane.smith@university.com".into(),
    }
);

roundtrip_and_validate!(
    hotel_room_roundtrip,
    HotelRoom,
    HotelRoom {
        id: 1,
        room_number: 401,
        room_type: RoomType::Deluxe,
        capacity: 2,
        amenities: "TV".into(),
        price_per_night: Decimal::new(12_000, 2),
        is_reserved: false,
    }
);

roundtrip_and_validate!(
    character_roundtrip,
    Character,
    Character {
        id: 1,
        name: "Gandalf".into(),
        class_name: CharacterClass::Mage,
        level: 10,
        strength: 15,
        dexterity: 20,
        intelligence: 80,
        hit_points: 100,
        inventory: Some("Staff".into()),
    }
);

roundtrip_and_validate!(
    laptop_roundtrip,
    Laptop,
    Laptop {
        id: 1,
        brand: LaptopBrand::Lenovo,
        processor: "Intel i7".into(),
        memory: 16,
        storage: 512,
        operation_system: OperatingSystem::ChromeOs,
        price: Decimal::new(99_900, 2),
    }
);

roundtrip_and_validate!(
    animal_roundtrip,
    Animal,
    Animal {
        id: 1,
        name: "Polly".into(),
        species: "Parrot".into(),
        birth_date: date(2019, 3, 1),
        sound: "Squawk".into(),
        kind: AnimalKind::Bird {
            wing_span: Decimal::new(3550, 2),
        },
    }
);

roundtrip_and_validate!(
    veterinarian_roundtrip,
    Veterinarian,
    Veterinarian {
        id: 1,
        employee: EmployeeFields {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            phone_number: "0888123456".into(),
        },
        license_number: "VET-42".into(),
        availability: Availability(false),
    }
);

roundtrip_and_validate!(
    hero_roundtrip,
    Hero,
    Hero {
        id: 1,
        name: "Kael".into(),
        description: "Keeper of hours".into(),
        kind: HeroKind::TimeMage(TimeMageTraits {
            mage: MageTraits {
                elemental_power: "Arcane".into(),
                spellbook_type: "Chronicle".into(),
            },
            time_magic_mastery: "Expert".into(),
            temporal_shift_ability: "Rewind".into(),
        }),
    }
);

roundtrip_and_validate!(
    credit_card_roundtrip,
    CreditCard,
    CreditCard {
        id: 1,
        card_owner: "Ivan".into(),
        card_number: MaskedCardNumber::parse("1111222233334444").unwrap(),
    }
);

roundtrip_and_validate!(
    reservation_roundtrip,
    Reservation,
    Reservation {
        id: 1,
        room_id: 3,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 5),
        kind: ReservationKind::Special,
    }
);

roundtrip_and_validate!(
    restaurant_review_roundtrip,
    RestaurantReview,
    RestaurantReview {
        id: 1,
        restaurant_id: 1,
        review: ReviewFields {
            reviewer_name: "Bob".into(),
            review_content: "Fine".into(),
            rating: 4,
        },
        kind: RestaurantReviewKind::FoodCritic {
            food_critic_cuisine_area: "Asian".into(),
        },
    }
);

roundtrip_and_validate!(
    video_game_roundtrip,
    VideoGame,
    VideoGame {
        id: 1,
        title: "Portal 2".into(),
        genre: Genre::Adventure,
        release_year: 2011,
        rating: Decimal::new(95, 1),
    }
);

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: 1,
        title: "Write docs".into(),
        description: "All of them".into(),
        priority: Priority::High,
        is_completed: false,
        creation_date: date(2024, 2, 1),
        completion_date: date(2024, 2, 10),
    }
);

roundtrip_and_validate!(
    programmer_profile_roundtrip,
    ProgrammerProfile,
    ProgrammerProfile {
        programmer: Programmer {
            id: 1,
            name: "Ada".into(),
        },
        projects: vec![ProjectWithTechnologies {
            project: Project {
                id: 1,
                name: "Engine".into(),
                description: "Analytical".into(),
            },
            technologies: vec![Technology {
                id: 1,
                name: "Rust".into(),
                description: "Systems language".into(),
            }],
        }],
    }
);

roundtrip_and_validate!(
    worker_roundtrip,
    Worker,
    Worker {
        id: 1,
        first_name: DEFAULT_FIRST_NAME.into(),
        last_name: DEFAULT_LAST_NAME.into(),
        age: Some(30),
        salary: None,
    }
);

#[test]
fn masked_card_never_serializes_full_number() {
    let card = CreditCard {
        id: 1,
        card_owner: "Ivan".into(),
        card_number: MaskedCardNumber::parse("9876543210987654").unwrap(),
    };
    let json = serde_json::to_string(&card).unwrap();
    assert!(json.contains("****-****-****-7654"));
    assert!(!json.contains("98765432"));
}
