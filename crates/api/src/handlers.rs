/// Day availability resolution and reporting
pub mod availability;
/// Booking creation, listing and cancellation
pub mod booking;
/// Organization registration and lookup
pub mod organization;
/// Weekly rule and date override management
pub mod schedule;
