use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        // Unknown strings fall back to Confirmed so they keep blocking the room
        Self::from_str(&s).unwrap_or(BookingStatus::Confirmed)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Half-open [check_in, check_out) stay interval.
///
/// The constructor rejects empty and inverted ranges, so a `DateRange` always
/// covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Create a validated date range
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, String> {
        if check_out <= check_in {
            return Err("Check-out date must be after check-in date".to_string());
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the range (always >= 1)
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Check whether two half-open ranges share at least one night.
    ///
    /// Back-to-back stays (one guest checks out the day the next checks in)
    /// do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

/// Booking model representing a stay reservation for a room
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate, // Exclusive: the guest leaves this morning
    pub total_price: Decimal, // NUMERIC(10, 2) in database
    pub status: String,       // Stored as TEXT, use BookingStatus enum for type safety
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new Confirmed booking
    pub fn new(user_id: Uuid, room_id: Uuid, range: &DateRange, total_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            room_id,
            check_in: range.check_in(),
            check_out: range.check_out(),
            total_price,
            status: BookingStatus::Confirmed.as_str().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Get status as an enum
    pub fn status_enum(&self) -> BookingStatus {
        BookingStatus::from_str(&self.status).unwrap_or(BookingStatus::Confirmed)
    }

    /// Check if booking is confirmed
    pub fn is_confirmed(&self) -> bool {
        self.status_enum() == BookingStatus::Confirmed
    }

    /// Check if booking is cancelled
    pub fn is_cancelled(&self) -> bool {
        self.status_enum() == BookingStatus::Cancelled
    }

    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Check whether this booking's stay shares a night with the given range
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.check_in < range.check_out() && self.check_out > range.check_in()
    }
}

/// Booking enriched with room and hotel names for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub room_number: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl BookingDetails {
    /// Build display details from a booking and its resolved names
    pub fn new(booking: Booking, room_number: String, hotel_name: String) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            room_id: booking.room_id,
            room_number,
            hotel_name,
            check_in: booking.check_in,
            check_out: booking.check_out,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

/// Aggregates over confirmed bookings in a reporting window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatistics {
    pub total_bookings: i64,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
    pub unique_customers: i64,
}

impl BookingStatistics {
    /// Statistics for an empty window
    pub fn empty() -> Self {
        Self {
            total_bookings: 0,
            total_revenue: Decimal::ZERO,
            average_booking_value: Decimal::ZERO,
            unique_customers: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
        DateRange::new(from, to).unwrap()
    }

    #[test]
    fn test_date_range_rejects_empty_and_inverted() {
        let day = date(2024, 1, 10);
        assert!(DateRange::new(day, day).is_err());
        assert!(DateRange::new(date(2024, 1, 12), date(2024, 1, 10)).is_err());
    }

    #[test]
    fn test_date_range_nights() {
        let r = range(date(2024, 3, 1), date(2024, 3, 4));
        assert_eq!(r.nights(), 3);

        let one = range(date(2024, 3, 1), date(2024, 3, 2));
        assert_eq!(one.nights(), 1);
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        let existing = range(date(2024, 1, 10), date(2024, 1, 13));

        // Overlaps the start of the existing stay
        assert!(range(date(2024, 1, 9), date(2024, 1, 11)).overlaps(&existing));
        // Overlaps the end
        assert!(range(date(2024, 1, 12), date(2024, 1, 15)).overlaps(&existing));
        // Identical range
        assert!(range(date(2024, 1, 10), date(2024, 1, 13)).overlaps(&existing));
        // Fully containing
        assert!(range(date(2024, 1, 9), date(2024, 1, 14)).overlaps(&existing));
    }

    #[test]
    fn test_overlap_back_to_back_is_allowed() {
        let existing = range(date(2024, 1, 10), date(2024, 1, 13));

        // Checking in on the existing check-out day is fine
        assert!(!range(date(2024, 1, 13), date(2024, 1, 15)).overlaps(&existing));
        // Checking out on the existing check-in day is fine
        assert!(!range(date(2024, 1, 5), date(2024, 1, 10)).overlaps(&existing));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = range(date(2024, 1, 9), date(2024, 1, 11));
        let b = range(date(2024, 1, 10), date(2024, 1, 13));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_booking_status_conversions() {
        assert_eq!(BookingStatus::from_str("confirmed"), Ok(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::from_str("CANCELLED"), Ok(BookingStatus::Cancelled));
        assert!(BookingStatus::from_str("unknown").is_err());
        assert_eq!(BookingStatus::Completed.as_str(), "completed");

        // Fallback keeps unknown rows blocking the room
        assert_eq!(BookingStatus::from("garbage".to_string()), BookingStatus::Confirmed);
    }

    #[test]
    fn test_new_booking_is_confirmed() {
        let r = range(date(2024, 1, 10), date(2024, 1, 13));
        let booking = Booking::new(Uuid::new_v4(), Uuid::new_v4(), &r, Decimal::new(45000, 2));

        assert!(booking.is_confirmed());
        assert!(!booking.is_cancelled());
        assert_eq!(booking.nights(), 3);
        assert!(booking.overlaps(&r));
    }
}
