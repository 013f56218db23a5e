pub mod availability;
pub mod booking_service;
pub mod hotel_service;
pub mod statistics;

pub use availability::AvailabilityService;
pub use booking_service::BookingService;
pub use hotel_service::HotelService;
pub use statistics::StatisticsService;
