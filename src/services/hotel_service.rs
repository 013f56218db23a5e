use crate::error::{option_to_result, AppError, AppResult};
use crate::models::{DateRange, Hotel, HotelSummary, HotelUpdate, Room};
use crate::repositories::{HotelRepository, RoomRepository};
use crate::services::AvailabilityService;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for hotel listings and room search
pub struct HotelService {
    hotel_repo: Arc<dyn HotelRepository>,
    room_repo: Arc<dyn RoomRepository>,
    availability: Arc<AvailabilityService>,
}

impl HotelService {
    pub fn new(
        hotel_repo: Arc<dyn HotelRepository>,
        room_repo: Arc<dyn RoomRepository>,
        availability: Arc<AvailabilityService>,
    ) -> Self {
        Self {
            hotel_repo,
            room_repo,
            availability,
        }
    }

    /// Find rooms available for the stay.
    ///
    /// Candidates match the city (substring of the hotel address) and hold
    /// at least `guests` people; rooms with a Confirmed booking overlapping
    /// the range are dropped. Bookings in any other status do not block a
    /// room.
    pub async fn search_rooms(
        &self,
        city: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
    ) -> AppResult<Vec<Room>> {
        info!(
            "Searching rooms: city={}, {} to {}, guests={}",
            city, check_in, check_out, guests
        );

        if guests <= 0 {
            return Err(AppError::Validation(
                "Guest count must be positive".to_string(),
            ));
        }
        let range = DateRange::new(check_in, check_out).map_err(AppError::Validation)?;

        let candidates = self
            .room_repo
            .find_by_city_and_capacity(city, guests)
            .await?;
        let available = self.availability.filter_available(candidates, &range).await?;

        info!("Search found {} available rooms", available.len());
        Ok(available)
    }

    /// List all hotels with room counts and the nightly price range.
    ///
    /// A hotel without rooms lists zero prices.
    pub async fn list_hotels(&self) -> AppResult<Vec<HotelSummary>> {
        let hotels = self.hotel_repo.find_all().await?;

        let mut summaries = Vec::with_capacity(hotels.len());
        for hotel in hotels {
            let rooms = self.room_repo.find_by_hotel(hotel.id).await?;
            summaries.push(HotelSummary {
                id: hotel.id,
                name: hotel.name,
                address: hotel.address,
                description: hotel.description,
                image_url: hotel.image_url,
                room_count: rooms.len() as i64,
                min_price: rooms
                    .iter()
                    .map(|r| r.price_per_night)
                    .min()
                    .unwrap_or(Decimal::ZERO),
                max_price: rooms
                    .iter()
                    .map(|r| r.price_per_night)
                    .max()
                    .unwrap_or(Decimal::ZERO),
            });
        }

        Ok(summaries)
    }

    /// Fetch a hotel by id
    pub async fn get_hotel(&self, hotel_id: Uuid) -> AppResult<Hotel> {
        option_to_result(self.hotel_repo.find_by_id(hotel_id).await?, "Hotel not found")
    }

    /// Fetch a room by id
    pub async fn get_room(&self, room_id: Uuid) -> AppResult<Room> {
        option_to_result(self.room_repo.find_by_id(room_id).await?, "Room not found")
    }

    /// Update a hotel's descriptive fields
    pub async fn update_hotel(&self, hotel_id: Uuid, update: HotelUpdate) -> AppResult<Hotel> {
        info!("Updating hotel {}", hotel_id);

        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation(
                    "Hotel name must not be empty".to_string(),
                ));
            }
        }
        if let Some(address) = &update.address {
            if address.trim().is_empty() {
                return Err(AppError::Validation(
                    "Hotel address must not be empty".to_string(),
                ));
            }
        }

        let hotel = self.hotel_repo.update(hotel_id, update).await?;
        Ok(hotel)
    }
}
