use crate::error::AppResult;
use crate::models::{DateRange, Room};
use crate::repositories::BookingRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Service for room availability checks
pub struct AvailabilityService {
    booking_repo: Arc<dyn BookingRepository>,
}

impl AvailabilityService {
    pub fn new(booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Check whether a room is free for every night of the range.
    ///
    /// Only Confirmed bookings block a room. The room is assumed to exist
    /// and the range to be valid; callers resolve both before asking.
    pub async fn is_available(&self, room_id: Uuid, range: &DateRange) -> AppResult<bool> {
        let bookings = self.booking_repo.find_confirmed_by_room(room_id).await?;
        let available = !bookings.iter().any(|b| b.overlaps(range));

        debug!(
            "Availability for room {} ({} nights): {}",
            room_id,
            range.nights(),
            available
        );
        Ok(available)
    }

    /// Keep only the rooms free for the whole range, preserving input order.
    ///
    /// Batched variant of [`is_available`](Self::is_available) used by
    /// search: one store round trip for all candidates.
    pub async fn filter_available(
        &self,
        rooms: Vec<Room>,
        range: &DateRange,
    ) -> AppResult<Vec<Room>> {
        if rooms.is_empty() {
            return Ok(rooms);
        }

        let room_ids: Vec<Uuid> = rooms.iter().map(|r| r.id).collect();
        let bookings = self.booking_repo.find_confirmed_by_rooms(&room_ids).await?;

        let blocked: HashSet<Uuid> = bookings
            .iter()
            .filter(|b| b.overlaps(range))
            .map(|b| b.room_id)
            .collect();

        Ok(rooms.into_iter().filter(|r| !blocked.contains(&r.id)).collect())
    }
}
