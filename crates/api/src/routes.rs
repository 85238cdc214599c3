/// Day availability endpoint
pub mod availability;
/// Booking endpoints
pub mod booking;
/// Health and version endpoints
pub mod health;
/// Organization endpoints
pub mod organization;
/// Weekly rule and date override endpoints
pub mod schedule;
