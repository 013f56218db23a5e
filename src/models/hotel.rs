use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Hotel model representing a property that offers rooms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Create a new Hotel
    pub fn new(
        name: String,
        address: String,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            address,
            description,
            image_url,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl NewHotel {
    /// Validate the creation input
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Hotel name must not be empty".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Hotel address must not be empty".to_string());
        }
        Ok(())
    }
}

/// Partial update for a hotel; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl HotelUpdate {
    /// True when the update carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
    }
}

/// Hotel enriched with room aggregates for listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSummary {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub room_count: i64,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hotel_validation() {
        let input = NewHotel {
            name: "Grand Hotel".to_string(),
            address: "123 Main Street, New York".to_string(),
            description: None,
            image_url: None,
        };
        assert!(input.validate().is_ok());

        let blank = NewHotel {
            name: "  ".to_string(),
            address: "somewhere".to_string(),
            description: None,
            image_url: None,
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_hotel_update_is_empty() {
        assert!(HotelUpdate::default().is_empty());

        let update = HotelUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
