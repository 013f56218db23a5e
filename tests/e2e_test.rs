mod helpers;

use booking_engine::models::*;
use chrono::{Duration, Utc};
use helpers::*;
use uuid::Uuid;

/// End-to-end test: Complete flow from search to cancellation and rebooking
#[tokio::test]
async fn test_complete_booking_flow() {
    let engine = TestEngine::new();
    let fixtures = TestFixtures::create(&engine).await;

    let guest = Uuid::new_v4();
    let check_in = date(2024, 7, 1);
    let check_out = date(2024, 7, 3);

    // Step 1: Search for a family room in Miami
    let rooms = engine
        .state
        .hotels
        .search_rooms("Miami", check_in, check_out, 4)
        .await
        .expect("Search failed");

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, fixtures.family_room.id);
    assert_eq!(rooms[0].price_per_night, price(240));

    // Step 2: Book it
    let booking = engine
        .state
        .bookings
        .create_booking(guest, rooms[0].id, check_in, check_out)
        .await
        .expect("Booking failed");

    assert_eq!(booking.total_price, price(480)); // 240 x 2 nights
    assert_eq!(booking.status, BookingStatus::Confirmed.as_str());
    assert_eq!(booking.hotel_name, "Seaside Resort");

    // Step 3: The room no longer shows up for the same dates
    let rooms = engine
        .state
        .hotels
        .search_rooms("Miami", check_in, check_out, 4)
        .await
        .expect("Search failed");
    assert!(rooms.is_empty());

    // Step 4: The guest sees the booking in their history
    let history = engine
        .state
        .bookings
        .bookings_for_user(guest)
        .await
        .expect("Failed to list bookings");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, booking.id);

    // Step 5: Plans change, the guest cancels
    engine
        .state
        .bookings
        .cancel_booking(booking.id)
        .await
        .expect("Cancel failed");

    let cancelled = engine
        .state
        .bookings
        .get_booking(booking.id)
        .await
        .expect("Booking disappeared");
    assert_eq!(cancelled.status, BookingStatus::Cancelled.as_str());

    // Step 6: The room is searchable again
    let rooms = engine
        .state
        .hotels
        .search_rooms("Miami", check_in, check_out, 4)
        .await
        .expect("Search failed");
    assert_eq!(rooms.len(), 1);

    // Step 7: A different guest books the freed dates
    let second_guest = Uuid::new_v4();
    let rebooked = engine
        .state
        .bookings
        .create_booking(second_guest, fixtures.family_room.id, check_in, check_out)
        .await
        .expect("Rebooking failed");

    assert_ne!(rebooked.id, booking.id);
    assert_eq!(rebooked.total_price, price(480));

    // Step 8: Statistics only count the confirmed booking
    let stats = engine
        .state
        .statistics
        .booking_statistics(Utc::now() - Duration::hours(1), Utc::now() + Duration::hours(1))
        .await
        .expect("Statistics failed");

    assert_eq!(stats.total_bookings, 1);
    assert_eq!(stats.total_revenue, price(480));
    assert_eq!(stats.unique_customers, 1);

    // Step 9: The hotel listing is unaffected by booking churn
    let summaries = engine.state.hotels.list_hotels().await.expect("Listing failed");
    let seaside = summaries
        .iter()
        .find(|s| s.id == fixtures.seaside_resort.id)
        .expect("Seaside Resort missing");

    assert_eq!(seaside.room_count, 1);
    assert_eq!(seaside.min_price, price(240));
    assert_eq!(seaside.max_price, price(240));
}

/// E2E test: One guest books consecutive stays in the same room
#[tokio::test]
async fn test_consecutive_stays_same_room() {
    let engine = TestEngine::new();
    let fixtures = TestFixtures::create(&engine).await;
    let guest = Uuid::new_v4();

    create_test_booking(
        &engine,
        guest,
        fixtures.standard_room.id,
        date(2024, 8, 1),
        date(2024, 8, 4),
    )
    .await;
    create_test_booking(
        &engine,
        guest,
        fixtures.standard_room.id,
        date(2024, 8, 4),
        date(2024, 8, 6),
    )
    .await;

    let history = engine
        .state
        .bookings
        .bookings_for_user(guest)
        .await
        .expect("Failed to list bookings");

    assert_eq!(history.len(), 2);
    assert!(history
        .iter()
        .all(|b| b.status == BookingStatus::Confirmed.as_str()));
}

/// E2E test: Bookings in one city never affect search results in another
#[tokio::test]
async fn test_search_scoped_to_city() {
    let engine = TestEngine::new();
    let fixtures = TestFixtures::create(&engine).await;

    create_test_booking(
        &engine,
        Uuid::new_v4(),
        fixtures.family_room.id,
        date(2024, 9, 1),
        date(2024, 9, 5),
    )
    .await;

    // Miami is fully booked for these dates
    let miami = engine
        .state
        .hotels
        .search_rooms("Miami", date(2024, 9, 1), date(2024, 9, 5), 1)
        .await
        .expect("Search failed");
    assert!(miami.is_empty());

    // New York is untouched
    let new_york = engine
        .state
        .hotels
        .search_rooms("New York", date(2024, 9, 1), date(2024, 9, 5), 1)
        .await
        .expect("Search failed");
    assert_eq!(new_york.len(), 2);
}

/// E2E test: A fully booked hotel drops out of search until the dates pass
#[tokio::test]
async fn test_fully_booked_hotel() {
    let engine = TestEngine::new();
    let fixtures = TestFixtures::create(&engine).await;

    create_test_booking(
        &engine,
        Uuid::new_v4(),
        fixtures.standard_room.id,
        date(2024, 10, 1),
        date(2024, 10, 5),
    )
    .await;
    create_test_booking(
        &engine,
        Uuid::new_v4(),
        fixtures.deluxe_room.id,
        date(2024, 10, 1),
        date(2024, 10, 5),
    )
    .await;

    let booked_dates = engine
        .state
        .hotels
        .search_rooms("New York", date(2024, 10, 2), date(2024, 10, 4), 1)
        .await
        .expect("Search failed");
    assert!(booked_dates.is_empty());

    // The week after is wide open
    let next_week = engine
        .state
        .hotels
        .search_rooms("New York", date(2024, 10, 5), date(2024, 10, 8), 1)
        .await
        .expect("Search failed");
    assert_eq!(next_week.len(), 2);
}
