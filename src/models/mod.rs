//! Domain models for the booking engine.
//!
//! This module contains all database-backed models representing
//! hotels, their rooms, and the bookings placed against them.

pub mod booking;
pub mod hotel;
pub mod room;

// Re-export all models for convenient access
pub use booking::{Booking, BookingDetails, BookingStatistics, BookingStatus, DateRange};
pub use hotel::{Hotel, HotelSummary, HotelUpdate, NewHotel};
pub use room::{NewRoom, Room};
