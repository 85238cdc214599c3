/// Booking reads, the atomic booking commit, and cancellation
pub mod booking;
/// Organization creation and lookups
pub mod organization;
/// Weekly rules and date overrides
pub mod schedule;
