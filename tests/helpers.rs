use booking_engine::models::*;
use booking_engine::repositories::{HotelRepository, RoomRepository};
use booking_engine::AppState;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Test harness: the full engine wired over the in-memory store
pub struct TestEngine {
    pub state: AppState,
}

impl TestEngine {
    /// Create an engine with an empty store
    pub fn new() -> Self {
        // Honors RUST_LOG when debugging a failing test
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        Self {
            state: AppState::in_memory(),
        }
    }
}

/// Test data fixtures echoing the demo catalog
pub struct TestFixtures {
    pub grand_hotel: Hotel,
    pub seaside_resort: Hotel,
    /// Grand Hotel 101: 150 per night, sleeps 2
    pub standard_room: Room,
    /// Grand Hotel 102: 220 per night, sleeps 3
    pub deluxe_room: Room,
    /// Seaside Resort 101: 240 per night, sleeps 4
    pub family_room: Room,
}

impl TestFixtures {
    /// Create test fixtures with sample data
    pub async fn create(engine: &TestEngine) -> Self {
        let grand_hotel = create_test_hotel(
            engine,
            "Grand Hotel",
            "New York, 5th Avenue, 123",
            Some("Luxury hotel in the city center"),
        )
        .await;

        let seaside_resort = create_test_hotel(
            engine,
            "Seaside Resort",
            "Miami, Ocean Drive, 789",
            Some("Beautiful resort by the sea"),
        )
        .await;

        let standard_room = create_test_room(engine, grand_hotel.id, "101", 150, 2).await;
        let deluxe_room = create_test_room(engine, grand_hotel.id, "102", 220, 3).await;
        let family_room = create_test_room(engine, seaside_resort.id, "101", 240, 4).await;

        Self {
            grand_hotel,
            seaside_resort,
            standard_room,
            deluxe_room,
            family_room,
        }
    }
}

/// Helper function to create a test hotel
pub async fn create_test_hotel(
    engine: &TestEngine,
    name: &str,
    address: &str,
    description: Option<&str>,
) -> Hotel {
    engine
        .state
        .hotel_repo
        .create(NewHotel {
            name: name.to_string(),
            address: address.to_string(),
            description: description.map(|d| d.to_string()),
            image_url: None,
        })
        .await
        .expect("Failed to create test hotel")
}

/// Helper function to create a test room
pub async fn create_test_room(
    engine: &TestEngine,
    hotel_id: Uuid,
    number: &str,
    price_per_night: i64,
    capacity: i32,
) -> Room {
    engine
        .state
        .room_repo
        .create(NewRoom {
            hotel_id,
            number: number.to_string(),
            price_per_night: price(price_per_night),
            capacity,
            description: None,
            image_url: None,
        })
        .await
        .expect("Failed to create test room")
}

/// Helper function to book a room through the booking service
pub async fn create_test_booking(
    engine: &TestEngine,
    user_id: Uuid,
    room_id: Uuid,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> BookingDetails {
    engine
        .state
        .bookings
        .create_booking(user_id, room_id, check_in, check_out)
        .await
        .expect("Failed to create test booking")
}

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Invalid test date")
}

/// Shorthand for a whole-unit price
pub fn price(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

/// Shorthand for a validated stay range
pub fn range(check_in: NaiveDate, check_out: NaiveDate) -> DateRange {
    DateRange::new(check_in, check_out).expect("Invalid test range")
}

/// Assert that two bookings are equal (ignoring timestamps)
pub fn assert_bookings_equal(a: &Booking, b: &Booking) {
    assert_eq!(a.id, b.id);
    assert_eq!(a.user_id, b.user_id);
    assert_eq!(a.room_id, b.room_id);
    assert_eq!(a.check_in, b.check_in);
    assert_eq!(a.check_out, b.check_out);
    assert_eq!(a.total_price, b.total_price);
    assert_eq!(a.status, b.status);
}
