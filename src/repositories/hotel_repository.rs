//! Postgres-backed hotel repository.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE hotels (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     address TEXT NOT NULL,
//!     description TEXT,
//!     image_url TEXT,
//!     created_at TIMESTAMPTZ NOT NULL
//! );
//! ```

use crate::error::RepositoryError;
use crate::models::{Hotel, HotelUpdate, NewHotel};
use crate::repositories::HotelRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    /// Create a new PgHotelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn create(&self, new: NewHotel) -> Result<Hotel, RepositoryError> {
        new.validate().map_err(RepositoryError::InvalidInput)?;

        let hotel = Hotel::new(new.name, new.address, new.description, new.image_url);
        let created = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (id, name, address, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, address, description, image_url, created_at
            "#,
        )
        .bind(hotel.id)
        .bind(&hotel.name)
        .bind(&hotel.address)
        .bind(&hotel.description)
        .bind(&hotel.image_url)
        .bind(hotel.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hotel>, RepositoryError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, address, description, image_url, created_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hotel)
    }

    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let hotels = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, address, description, image_url, created_at
            FROM hotels
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(hotels)
    }

    async fn update(&self, id: Uuid, update: HotelUpdate) -> Result<Hotel, RepositoryError> {
        if update.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepositoryError::NotFound("Hotel not found".to_string()));
        }

        let updated = sqlx::query_as::<_, Hotel>(
            r#"
            UPDATE hotels
            SET name = COALESCE($2, name),
                address = COALESCE($3, address),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url)
            WHERE id = $1
            RETURNING id, name, address, description, image_url, created_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.address)
        .bind(update.description)
        .bind(update.image_url)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound("Hotel not found".to_string()))
    }
}
