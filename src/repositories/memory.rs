//! In-memory backend implementing every repository trait.
//!
//! One cloneable handle over shared state, used by tests and by embedders
//! that want the engine without a database. The write lock in
//! [`BookingRepository::create`] spans the availability check and the
//! insert, which is what keeps concurrent double-booking out.

use crate::error::RepositoryError;
use crate::models::{
    Booking, BookingStatus, DateRange, Hotel, HotelUpdate, NewHotel, NewRoom, Room,
};
use crate::repositories::{BookingRepository, HotelRepository, RoomRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct StoreInner {
    hotels: HashMap<Uuid, Hotel>,
    rooms: HashMap<Uuid, Room>,
    bookings: HashMap<Uuid, Booking>,
}

/// Self-contained store backend; cheap to clone, clones share state
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelRepository for InMemoryStore {
    async fn create(&self, new: NewHotel) -> Result<Hotel, RepositoryError> {
        new.validate().map_err(RepositoryError::InvalidInput)?;

        let hotel = Hotel::new(new.name, new.address, new.description, new.image_url);
        let mut inner = self.inner.write().await;
        inner.hotels.insert(hotel.id, hotel.clone());
        Ok(hotel)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hotel>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.hotels.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut hotels: Vec<Hotel> = inner.hotels.values().cloned().collect();
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hotels)
    }

    async fn update(&self, id: Uuid, update: HotelUpdate) -> Result<Hotel, RepositoryError> {
        let mut inner = self.inner.write().await;
        let hotel = inner
            .hotels
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound("Hotel not found".to_string()))?;

        if let Some(name) = update.name {
            hotel.name = name;
        }
        if let Some(address) = update.address {
            hotel.address = address;
        }
        if let Some(description) = update.description {
            hotel.description = Some(description);
        }
        if let Some(image_url) = update.image_url {
            hotel.image_url = Some(image_url);
        }

        Ok(hotel.clone())
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn create(&self, new: NewRoom) -> Result<Room, RepositoryError> {
        new.validate().map_err(RepositoryError::InvalidInput)?;

        let mut inner = self.inner.write().await;
        if !inner.hotels.contains_key(&new.hotel_id) {
            // Same failure the Postgres foreign key produces
            return Err(RepositoryError::ConstraintViolation(
                "Hotel does not exist".to_string(),
            ));
        }

        let room = Room::new(
            new.hotel_id,
            new.number,
            new.price_per_night,
            new.capacity,
            new.description,
            new.image_url,
        );
        inner.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.rooms.get(&id).cloned())
    }

    async fn find_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut rooms: Vec<Room> = inner
            .rooms
            .values()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    async fn find_by_city_and_capacity(
        &self,
        city: &str,
        min_capacity: i32,
    ) -> Result<Vec<Room>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut rooms: Vec<Room> = inner
            .rooms
            .values()
            .filter(|r| {
                r.capacity >= min_capacity
                    && inner
                        .hotels
                        .get(&r.hotel_id)
                        .map(|h| h.address.contains(city))
                        .unwrap_or(false)
            })
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        range: &DateRange,
        total_price: Decimal,
    ) -> Result<Booking, RepositoryError> {
        // Write lock held across check and insert
        let mut inner = self.inner.write().await;

        if !inner.rooms.contains_key(&room_id) {
            return Err(RepositoryError::NotFound("Room not found".to_string()));
        }

        let conflict = inner
            .bookings
            .values()
            .any(|b| b.room_id == room_id && b.is_confirmed() && b.overlaps(range));
        if conflict {
            return Err(RepositoryError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        let booking = Booking::new(user_id, room_id, range, total_price);
        inner.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.bookings.get(&id).cloned())
    }

    async fn find_confirmed_by_room(&self, room_id: Uuid) -> Result<Vec<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.room_id == room_id && b.is_confirmed())
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.check_in);
        Ok(bookings)
    }

    async fn find_confirmed_by_rooms(
        &self,
        room_ids: &[Uuid],
    ) -> Result<Vec<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| room_ids.contains(&b.room_id) && b.is_confirmed())
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.check_in);
        Ok(bookings)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner.bookings.values().cloned().collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, RepositoryError> {
        let mut inner = self.inner.write().await;
        let booking = inner
            .bookings
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound("Booking not found".to_string()))?;
        booking.status = status.as_str().to_string();
        Ok(booking.clone())
    }

    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.created_at >= start && b.created_at <= end)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }
}
