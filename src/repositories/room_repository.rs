//! Postgres-backed room repository.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE rooms (
//!     id UUID PRIMARY KEY,
//!     hotel_id UUID NOT NULL REFERENCES hotels(id),
//!     number TEXT NOT NULL,
//!     price_per_night NUMERIC(10, 2) NOT NULL CHECK (price_per_night >= 0),
//!     capacity INT NOT NULL CHECK (capacity > 0),
//!     description TEXT,
//!     image_url TEXT,
//!     created_at TIMESTAMPTZ NOT NULL
//! );
//! ```

use crate::error::RepositoryError;
use crate::models::{NewRoom, Room};
use crate::repositories::RoomRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn create(&self, new: NewRoom) -> Result<Room, RepositoryError> {
        new.validate().map_err(RepositoryError::InvalidInput)?;

        // An unknown hotel_id surfaces as a foreign key violation
        let room = Room::new(
            new.hotel_id,
            new.number,
            new.price_per_night,
            new.capacity,
            new.description,
            new.image_url,
        );
        let created = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (id, hotel_id, number, price_per_night, capacity, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, hotel_id, number, price_per_night, capacity, description, image_url, created_at
            "#,
        )
        .bind(room.id)
        .bind(room.hotel_id)
        .bind(&room.number)
        .bind(room.price_per_night)
        .bind(room.capacity)
        .bind(&room.description)
        .bind(&room.image_url)
        .bind(room.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, RepositoryError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, hotel_id, number, price_per_night, capacity, description, image_url, created_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    async fn find_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, RepositoryError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, hotel_id, number, price_per_night, capacity, description, image_url, created_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY number
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    async fn find_by_city_and_capacity(
        &self,
        city: &str,
        min_capacity: i32,
    ) -> Result<Vec<Room>, RepositoryError> {
        // City is matched as a substring of the hotel address, as the search
        // page expects
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT r.id, r.hotel_id, r.number, r.price_per_night, r.capacity, r.description, r.image_url, r.created_at
            FROM rooms r
            JOIN hotels h ON h.id = r.hotel_id
            WHERE h.address LIKE '%' || $1 || '%'
              AND r.capacity >= $2
            ORDER BY r.number
            "#,
        )
        .bind(city)
        .bind(min_capacity)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }
}
