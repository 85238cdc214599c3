use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use slotbook_core::models::schedule::SlotDuration;
use slotbook_core::scheduling::{available_slots, generate_slots};

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn hour() -> SlotDuration {
    SlotDuration::from_minutes(60).unwrap()
}

/// Hourly 16:00-20:00: slots 16:00, 17:00, 18:00, 19:00.
fn evening_slots() -> Vec<NaiveTime> {
    generate_slots(at(16), at(20), hour())
}

#[test]
fn test_empty_day_offers_every_slot() {
    let available = available_slots(&evening_slots(), 3, &[], hour());

    assert_eq!(available, vec![at(16), at(17), at(18), at(19)]);
}

#[test]
fn test_only_slots_adjacent_to_booked_block_remain() {
    // With 17:00 taken, 19:00 is excluded: {17:00, 19:00} skips 18:00 and
    // committing to it would risk an unfillable window.
    let available = available_slots(&evening_slots(), 3, &[at(17)], hour());

    assert_eq!(available, vec![at(16), at(18)]);
}

#[test]
fn test_contiguous_block_extends_at_both_ends() {
    let available = available_slots(&evening_slots(), 3, &[at(17), at(18)], hour());

    assert_eq!(available, vec![at(16), at(19)]);
}

#[test]
fn test_day_limit_reached_offers_nothing() {
    let available = available_slots(&evening_slots(), 3, &[at(16), at(17), at(18)], hour());

    assert!(available.is_empty());
}

#[test]
fn test_zero_max_sessions_offers_nothing() {
    let available = available_slots(&evening_slots(), 0, &[], hour());

    assert!(available.is_empty());
}

#[test]
fn test_overbooked_day_offers_nothing() {
    // More active bookings than the limit allows (e.g. after the limit was
    // lowered): nothing further may be booked.
    let available = available_slots(&evening_slots(), 2, &[at(16), at(17), at(18)], hour());

    assert!(available.is_empty());
}

#[test]
fn test_booked_slots_are_never_offered() {
    let available = available_slots(&evening_slots(), 4, &[at(17)], hour());

    assert!(!available.contains(&at(17)));
}

#[test]
fn test_single_session_day_offers_every_slot() {
    // With max_sessions = 1 any slot alone is a valid final schedule.
    let available = available_slots(&evening_slots(), 1, &[], hour());

    assert_eq!(available, evening_slots());
}

#[test]
fn test_result_is_idempotent() {
    let booked = [at(17)];
    let first = available_slots(&evening_slots(), 3, &booked, hour());
    let second = available_slots(&evening_slots(), 3, &booked, hour());

    assert_eq!(first, second);
}

#[test]
fn test_no_slots_means_no_availability() {
    let available = available_slots(&[], 3, &[], hour());

    assert!(available.is_empty());
}

#[test]
fn test_half_hour_sessions() {
    let duration = SlotDuration::from_minutes(30).unwrap();
    let ten_thirty = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
    let eleven_thirty = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
    // 10:00, 10:30, 11:00, 11:30.
    let slots = generate_slots(at(10), at(12), duration);

    let available = available_slots(&slots, 3, &[ten_thirty], duration);

    // 11:30 would skip 11:00.
    assert_eq!(available, vec![at(10), at(11)]);
    assert!(!available.contains(&eleven_thirty));
}

#[test]
fn test_existing_window_can_only_be_healed() {
    // A pre-existing hole (16:00 + 18:00 booked) admits only the slot that
    // closes it.
    let available = available_slots(&evening_slots(), 4, &[at(16), at(18)], hour());

    assert_eq!(available, vec![at(17)]);
}

#[test]
fn test_full_day_capacity_keeps_all_slots_reachable() {
    // Capacity equal to the slot count: every slot can still seed a
    // contiguous final schedule.
    let available = available_slots(&evening_slots(), 4, &[], hour());

    assert_eq!(available, evening_slots());
}
