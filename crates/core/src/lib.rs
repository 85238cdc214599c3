//! # Slotbook Core
//!
//! Domain types and scheduling algorithms for the Slotbook appointment
//! scheduler. Everything in this crate is pure and synchronous: the
//! algorithms operate on in-memory values supplied by the booking ledger
//! (`slotbook-db`) and surfaced by the API layer (`slotbook-api`).
//!
//! The interesting part lives in [`scheduling`]: slot generation, gap
//! ("window") detection, and the gap-free availability resolver that decides
//! which of a day's remaining slots may still be booked.

/// Domain error types shared across the workspace
pub mod errors;
/// Organizations, schedules, bookings, and API request/response types
pub mod models;
/// Slot generation, gap detection, availability, and rule resolution
pub mod scheduling;
