use chrono::NaiveTime;

use crate::models::schedule::SlotDuration;

/// Generates the bookable start times between `start` and `end`.
///
/// Starting at `start`, emits the current time and advances by `duration`;
/// stops as soon as the next session would run past `end`, so the last slot
/// always fits entirely before `end`. The result is finite, deterministic and
/// strictly increasing. `end <= start` (or a window shorter than one session)
/// yields an empty sequence, not an error; callers must not assume the
/// result is non-empty.
pub fn generate_slots(start: NaiveTime, end: NaiveTime, duration: SlotDuration) -> Vec<NaiveTime> {
    let step = duration.as_chrono();
    let mut slots = Vec::new();
    let mut current = start;

    loop {
        // overflowing_add_signed reports midnight wrap-around; a session that
        // wraps past midnight never fits in a same-day window.
        let (session_end, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 || session_end <= current || session_end > end {
            break;
        }
        slots.push(current);
        current = session_end;
    }

    slots
}
