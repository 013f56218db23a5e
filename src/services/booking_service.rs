use crate::error::{option_to_result, AppError, AppResult};
use crate::models::{Booking, BookingDetails, BookingStatus, DateRange, Hotel, Room};
use crate::repositories::{BookingRepository, HotelRepository, RoomRepository};
use crate::services::AvailabilityService;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for the booking lifecycle
pub struct BookingService {
    booking_repo: Arc<dyn BookingRepository>,
    room_repo: Arc<dyn RoomRepository>,
    hotel_repo: Arc<dyn HotelRepository>,
    availability: Arc<AvailabilityService>,
}

impl BookingService {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        room_repo: Arc<dyn RoomRepository>,
        hotel_repo: Arc<dyn HotelRepository>,
        availability: Arc<AvailabilityService>,
    ) -> Self {
        Self {
            booking_repo,
            room_repo,
            hotel_repo,
            availability,
        }
    }

    /// Book a room for a user over [check_in, check_out).
    ///
    /// Total price is price_per_night times the number of nights. Fails with
    /// `NotFound` for an unknown room, `Validation` for an empty or inverted
    /// range, and `Conflict` when the dates are taken.
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<BookingDetails> {
        info!(
            "Creating booking: user={}, room={}, {} to {}",
            user_id, room_id, check_in, check_out
        );

        let range = DateRange::new(check_in, check_out).map_err(AppError::Validation)?;

        let room = option_to_result(
            self.room_repo.find_by_id(room_id).await?,
            "Room not found",
        )?;
        let hotel = option_to_result(
            self.hotel_repo.find_by_id(room.hotel_id).await?,
            "Hotel not found",
        )?;

        // Fast pre-check without taking the room lock
        if !self.availability.is_available(room_id, &range).await? {
            return Err(AppError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        let total_price = room.price_per_night * Decimal::from(range.nights());

        // The store re-checks availability under the room lock, so a
        // concurrent create racing us past the pre-check still loses here
        let booking = self
            .booking_repo
            .create(user_id, room_id, &range, total_price)
            .await?;

        info!(
            "Booking {} created: {} nights for {}",
            booking.id,
            range.nights(),
            booking.total_price
        );
        Ok(BookingDetails::new(booking, room.number, hotel.name))
    }

    /// Cancel a booking.
    ///
    /// Unknown ids fail with `NotFound`. Cancelling an already cancelled
    /// booking succeeds without changing anything.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> AppResult<()> {
        info!("Cancelling booking {}", booking_id);

        self.booking_repo
            .set_status(booking_id, BookingStatus::Cancelled)
            .await?;
        Ok(())
    }

    /// Fetch a single booking with its room and hotel names
    pub async fn get_booking(&self, booking_id: Uuid) -> AppResult<BookingDetails> {
        let booking = option_to_result(
            self.booking_repo.find_by_id(booking_id).await?,
            "Booking not found",
        )?;

        let room = option_to_result(
            self.room_repo.find_by_id(booking.room_id).await?,
            "Room not found",
        )?;
        let hotel = option_to_result(
            self.hotel_repo.find_by_id(room.hotel_id).await?,
            "Hotel not found",
        )?;

        Ok(BookingDetails::new(booking, room.number, hotel.name))
    }

    /// All bookings of a user, newest first
    pub async fn bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<BookingDetails>> {
        let bookings = self.booking_repo.find_by_user(user_id).await?;
        self.resolve_details(bookings).await
    }

    /// Every booking in the system, newest first
    pub async fn all_bookings(&self) -> AppResult<Vec<BookingDetails>> {
        let bookings = self.booking_repo.find_all().await?;
        self.resolve_details(bookings).await
    }

    /// Enrich bookings with room and hotel names, caching lookups so a page
    /// of bookings for one room costs two reads, not 2N
    async fn resolve_details(&self, bookings: Vec<Booking>) -> AppResult<Vec<BookingDetails>> {
        let mut rooms: HashMap<Uuid, Room> = HashMap::new();
        let mut hotels: HashMap<Uuid, Hotel> = HashMap::new();
        let mut details = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let room = match rooms.get(&booking.room_id) {
                Some(room) => room.clone(),
                None => {
                    let room = option_to_result(
                        self.room_repo.find_by_id(booking.room_id).await?,
                        "Room not found",
                    )?;
                    rooms.insert(booking.room_id, room.clone());
                    room
                }
            };

            let hotel = match hotels.get(&room.hotel_id) {
                Some(hotel) => hotel.clone(),
                None => {
                    let hotel = option_to_result(
                        self.hotel_repo.find_by_id(room.hotel_id).await?,
                        "Hotel not found",
                    )?;
                    hotels.insert(room.hotel_id, hotel.clone());
                    hotel
                }
            };

            details.push(BookingDetails::new(booking, room.number, hotel.name));
        }

        Ok(details)
    }
}
