//! Booking Engine Library
//!
//! Room availability, booking-conflict prevention, and room search for the
//! hotel platform. The engine is embedded in-process by a presentation
//! layer and runs over a pluggable store: Postgres or in-memory.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repositories::{
    BookingRepository, HotelRepository, InMemoryStore, PgBookingRepository, PgHotelRepository,
    PgRoomRepository, RoomRepository,
};
use services::{AvailabilityService, BookingService, HotelService, StatisticsService};
use std::sync::Arc;

/// Application state containing all repositories and services
pub struct AppState {
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub availability: Arc<AvailabilityService>,
    pub bookings: Arc<BookingService>,
    pub hotels: Arc<HotelService>,
    pub statistics: Arc<StatisticsService>,
}

impl AppState {
    /// Create a new AppState over a Postgres store
    pub fn new(pool: sqlx::PgPool) -> Self {
        let hotel_repo: Arc<dyn HotelRepository> = Arc::new(PgHotelRepository::new(pool.clone()));
        let room_repo: Arc<dyn RoomRepository> = Arc::new(PgRoomRepository::new(pool.clone()));
        let booking_repo: Arc<dyn BookingRepository> = Arc::new(PgBookingRepository::new(pool));
        Self::from_repositories(hotel_repo, room_repo, booking_repo)
    }

    /// Create a new AppState over a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self::from_repositories(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    /// Wire the services over explicit repository implementations
    pub fn from_repositories(
        hotel_repo: Arc<dyn HotelRepository>,
        room_repo: Arc<dyn RoomRepository>,
        booking_repo: Arc<dyn BookingRepository>,
    ) -> Self {
        let availability = Arc::new(AvailabilityService::new(booking_repo.clone()));
        let bookings = Arc::new(BookingService::new(
            booking_repo.clone(),
            room_repo.clone(),
            hotel_repo.clone(),
            availability.clone(),
        ));
        let hotels = Arc::new(HotelService::new(
            hotel_repo.clone(),
            room_repo.clone(),
            availability.clone(),
        ));
        let statistics = Arc::new(StatisticsService::new(booking_repo.clone()));

        Self {
            hotel_repo,
            room_repo,
            booking_repo,
            availability,
            bookings,
            hotels,
            statistics,
        }
    }
}
