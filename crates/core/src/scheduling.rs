//! The scheduling core: everything here is a pure function over in-memory
//! values. Control flow for one availability query is
//! resolver → slots → (ledger supplies booked starts) → availability.

/// Gap-free availability resolution, the central algorithm
pub mod availability;
/// Window ("gap") detection over a day's chosen slots
pub mod gaps;
/// Override-before-weekly schedule resolution
pub mod resolver;
/// Discrete slot generation from an availability window
pub mod slots;

pub use availability::available_slots;
pub use gaps::has_gap;
pub use resolver::{resolve_day_schedule, weekday_index};
pub use slots::generate_slots;
