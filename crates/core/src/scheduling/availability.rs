use chrono::NaiveTime;

use crate::models::schedule::SlotDuration;
use crate::scheduling::gaps::has_gap;

/// Of the slots not yet booked, returns exactly those whose booking could
/// still lead to a final gap-free day schedule within `max_sessions` total
/// bookings.
///
/// Decision rule for each candidate `s` not in `booked`:
///
/// 1. If `booked ∪ {s}` already contains a gap, `s` is rejected outright —
///    committing to it would make the day invalid regardless of any future
///    choices.
/// 2. Otherwise `s` is accepted if some completion drawn from the remaining
///    open slots (possibly the empty one) keeps the day gap-free without
///    exceeding `max_sessions`, or if `booked ∪ {s}` already reaches the
///    session limit.
///
/// This refuses a booking the moment it would orphan a slot — leave a hole
/// that can never be filled — even while the day still has capacity.
///
/// The completion search enumerates combinations of open slots by increasing
/// size and stops at the first gap-free one; it is an existence check, not an
/// enumeration of all valid final schedules. The cost is combinatorial in the
/// number of open slots, which is bounded by a working day's slot count
/// (e.g. 12 slots for hourly 08:00–20:00), so the brute force is acceptable.
///
/// Pure function: never fails on valid input and is idempotent. `all_slots`
/// is expected strictly increasing as produced by
/// [`generate_slots`](crate::scheduling::slots::generate_slots); the result
/// preserves that order.
pub fn available_slots(
    all_slots: &[NaiveTime],
    max_sessions: u32,
    booked: &[NaiveTime],
    duration: SlotDuration,
) -> Vec<NaiveTime> {
    if booked.len() as u32 >= max_sessions {
        // Day limit reached.
        return Vec::new();
    }
    let remaining = (max_sessions as usize) - booked.len();

    let open: Vec<NaiveTime> = all_slots
        .iter()
        .copied()
        .filter(|slot| !booked.contains(slot))
        .collect();

    let mut safe = Vec::new();
    for &candidate in &open {
        let mut chosen: Vec<NaiveTime> = booked.to_vec();
        chosen.push(candidate);

        if has_gap(&chosen, duration) {
            continue;
        }

        let pool: Vec<NaiveTime> = open
            .iter()
            .copied()
            .filter(|&slot| slot != candidate)
            .collect();

        if completion_exists(&chosen, &pool, remaining - 1, duration) {
            safe.push(candidate);
        }
    }

    safe
}

/// True if some subset of `pool` of size `0..=budget`, combined with
/// `chosen`, has no gap. Sizes are tried in increasing order and the first
/// gap-free combination wins.
fn completion_exists(
    chosen: &[NaiveTime],
    pool: &[NaiveTime],
    budget: usize,
    duration: SlotDuration,
) -> bool {
    let mut combined = chosen.to_vec();
    for size in 0..=budget.min(pool.len()) {
        let mut indices = Vec::with_capacity(size);
        if any_combination(pool, size, 0, &mut indices, &mut |extra| {
            combined.truncate(chosen.len());
            combined.extend_from_slice(extra);
            !has_gap(&combined, duration)
        }) {
            return true;
        }
    }
    false
}

/// Visits every `size`-combination of `pool`, short-circuiting on the first
/// one the predicate accepts.
fn any_combination(
    pool: &[NaiveTime],
    size: usize,
    first: usize,
    picked: &mut Vec<NaiveTime>,
    accept: &mut impl FnMut(&[NaiveTime]) -> bool,
) -> bool {
    if picked.len() == size {
        return accept(picked);
    }
    // Not enough elements left to reach the requested size.
    let needed = size - picked.len();
    for index in first..=pool.len().saturating_sub(needed) {
        picked.push(pool[index]);
        if any_combination(pool, size, index + 1, picked, accept) {
            return true;
        }
        picked.pop();
    }
    false
}
