/// Booking records and booking request/response types
pub mod booking;
/// Organizations: the tenant boundary
pub mod organization;
/// Weekly rules, date overrides, and the resolved day schedule
pub mod schedule;
