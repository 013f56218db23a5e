use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Room model representing a bookable room within a hotel
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub number: String,
    pub price_per_night: Decimal, // NUMERIC(10, 2) in database
    pub capacity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Create a new Room
    pub fn new(
        hotel_id: Uuid,
        number: String,
        price_per_night: Decimal,
        capacity: i32,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            hotel_id,
            number,
            price_per_night,
            capacity,
            description,
            image_url,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub hotel_id: Uuid,
    pub number: String,
    pub price_per_night: Decimal,
    pub capacity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl NewRoom {
    /// Validate the creation input
    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Room number must not be empty".to_string());
        }
        if self.capacity <= 0 {
            return Err("Capacity must be greater than zero".to_string());
        }
        if self.price_per_night < Decimal::ZERO {
            return Err("Price per night must not be negative".to_string());
        }
        Ok(())
    }
}
