use chrono::NaiveTime;

use crate::models::schedule::SlotDuration;

/// Returns true if the chosen slot starts contain a "window": an unbooked
/// slot strictly between two booked ones.
///
/// The input is sorted internally, so caller ordering is irrelevant. Two
/// adjacent chosen slots more than one `duration` apart mean at least one
/// slot between them was skipped. Sets of size 0 or 1 have no gap by
/// definition.
pub fn has_gap(slots: &[NaiveTime], duration: SlotDuration) -> bool {
    if slots.len() <= 1 {
        return false;
    }

    let mut sorted = slots.to_vec();
    sorted.sort_unstable();

    let step = duration.as_chrono();
    sorted.windows(2).any(|pair| pair[1] - pair[0] > step)
}
