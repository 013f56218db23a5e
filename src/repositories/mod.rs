//! Repository traits and backends for the booking store.
//!
//! Services depend on the traits only. Two backends are provided: the
//! `Pg*Repository` structs over a Postgres pool, and `InMemoryStore`, a
//! self-contained backend used by tests and embedders that run without a
//! database.

pub mod booking_repository;
pub mod hotel_repository;
pub mod memory;
pub mod room_repository;

// Re-export all backends for convenient access
pub use booking_repository::PgBookingRepository;
pub use hotel_repository::PgHotelRepository;
pub use memory::InMemoryStore;
pub use room_repository::PgRoomRepository;

use crate::error::RepositoryError;
use crate::models::{Booking, BookingStatus, DateRange, Hotel, HotelUpdate, NewHotel, NewRoom, Room};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Data access for hotels
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Insert a new hotel
    async fn create(&self, new: NewHotel) -> Result<Hotel, RepositoryError>;

    /// Find a hotel by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hotel>, RepositoryError>;

    /// List all hotels, ordered by name
    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Apply a partial update to a hotel
    async fn update(&self, id: Uuid, update: HotelUpdate) -> Result<Hotel, RepositoryError>;
}

/// Data access for rooms
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert a new room; the hotel must exist
    async fn create(&self, new: NewRoom) -> Result<Room, RepositoryError>;

    /// Find a room by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, RepositoryError>;

    /// List the rooms of a hotel
    async fn find_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, RepositoryError>;

    /// List rooms whose hotel address contains `city` and whose capacity is
    /// at least `min_capacity`
    async fn find_by_city_and_capacity(
        &self,
        city: &str,
        min_capacity: i32,
    ) -> Result<Vec<Room>, RepositoryError>;
}

/// Data access for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically create a Confirmed booking for the room and range.
    ///
    /// The availability check and the insert happen under a per-room lock,
    /// so two concurrent calls for overlapping ranges cannot both succeed.
    /// Returns `NotFound` when the room does not exist and `Conflict` when a
    /// Confirmed booking already covers one of the nights.
    async fn create(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        range: &DateRange,
        total_price: Decimal,
    ) -> Result<Booking, RepositoryError>;

    /// Find a booking by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, RepositoryError>;

    /// Confirmed bookings for a room
    async fn find_confirmed_by_room(&self, room_id: Uuid) -> Result<Vec<Booking>, RepositoryError>;

    /// Confirmed bookings for a set of rooms
    async fn find_confirmed_by_rooms(
        &self,
        room_ids: &[Uuid],
    ) -> Result<Vec<Booking>, RepositoryError>;

    /// All bookings of a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, RepositoryError>;

    /// All bookings, newest first
    async fn find_all(&self) -> Result<Vec<Booking>, RepositoryError>;

    /// Set the status of a booking, returning the updated row
    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, RepositoryError>;

    /// Bookings created in the inclusive [start, end] window
    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, RepositoryError>;
}
