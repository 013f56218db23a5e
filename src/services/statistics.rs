use crate::error::{AppError, AppResult};
use crate::models::BookingStatistics;
use crate::repositories::BookingRepository;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for booking reports
pub struct StatisticsService {
    booking_repo: Arc<dyn BookingRepository>,
}

impl StatisticsService {
    pub fn new(booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Aggregate Confirmed bookings created in the inclusive [start, end]
    /// window: count, revenue, average booking value, distinct customers.
    pub async fn booking_statistics(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<BookingStatistics> {
        if end < start {
            return Err(AppError::Validation(
                "Window end must not precede its start".to_string(),
            ));
        }

        let bookings = self.booking_repo.created_between(start, end).await?;
        let confirmed: Vec<_> = bookings.into_iter().filter(|b| b.is_confirmed()).collect();

        if confirmed.is_empty() {
            return Ok(BookingStatistics::empty());
        }

        let total_bookings = confirmed.len() as i64;
        let total_revenue: Decimal = confirmed.iter().map(|b| b.total_price).sum();
        let unique_customers = confirmed
            .iter()
            .map(|b| b.user_id)
            .collect::<HashSet<Uuid>>()
            .len() as i64;

        info!(
            "Statistics for {} to {}: {} bookings, revenue {}",
            start, end, total_bookings, total_revenue
        );
        Ok(BookingStatistics {
            total_bookings,
            total_revenue,
            average_booking_value: total_revenue / Decimal::from(total_bookings),
            unique_customers,
        })
    }
}
