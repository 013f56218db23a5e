//! Postgres-backed booking repository.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE bookings (
//!     id UUID PRIMARY KEY,
//!     user_id UUID NOT NULL,
//!     room_id UUID NOT NULL REFERENCES rooms(id),
//!     check_in DATE NOT NULL,
//!     check_out DATE NOT NULL,
//!     total_price NUMERIC(10, 2) NOT NULL,
//!     status TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL,
//!     CHECK (check_out > check_in)
//! );
//! ```

use crate::error::RepositoryError;
use crate::models::{Booking, BookingStatus, DateRange};
use crate::repositories::BookingRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        range: &DateRange,
        total_price: Decimal,
    ) -> Result<Booking, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Lock the room row so concurrent creates for the same room serialize
        let locked = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM rooms
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Err(RepositoryError::NotFound("Room not found".to_string()));
        }

        // Count Confirmed bookings sharing a night with the requested range
        let overlapping = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE room_id = $1
              AND status = $2
              AND check_in < $4
              AND check_out > $3
            "#,
        )
        .bind(room_id)
        .bind(BookingStatus::Confirmed.as_str())
        .bind(range.check_in())
        .bind(range.check_out())
        .fetch_one(&mut *tx)
        .await?;

        if overlapping > 0 {
            return Err(RepositoryError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        let booking = Booking::new(user_id, room_id, range, total_price);
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, user_id, room_id, check_in, check_out, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, room_id, check_in, check_out, total_price, status, created_at
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.room_id)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.total_price)
        .bind(&booking.status)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, RepositoryError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn find_confirmed_by_room(&self, room_id: Uuid) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            WHERE room_id = $1 AND status = $2
            ORDER BY check_in
            "#,
        )
        .bind(room_id)
        .bind(BookingStatus::Confirmed.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_confirmed_by_rooms(
        &self,
        room_ids: &[Uuid],
    ) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            WHERE room_id = ANY($1) AND status = $2
            ORDER BY check_in
            "#,
        )
        .bind(room_ids)
        .bind(BookingStatus::Confirmed.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, RepositoryError> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, room_id, check_in, check_out, total_price, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound("Booking not found".to_string()))
    }

    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, room_id, check_in, check_out, total_price, status, created_at
            FROM bookings
            WHERE created_at BETWEEN $1 AND $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
