use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::models::schedule::SlotDuration;
use slotbook_core::scheduling::generate_slots;

fn at(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn minutes(m: u32) -> SlotDuration {
    SlotDuration::from_minutes(m).unwrap()
}

#[test]
fn test_hourly_slots_over_working_day() {
    let slots = generate_slots(at(9, 0), at(13, 0), minutes(60));

    assert_eq!(slots, vec![at(9, 0), at(10, 0), at(11, 0), at(12, 0)]);
}

#[test]
fn test_last_slot_must_fit_entirely() {
    // 9:00-12:30 with 60-minute sessions: 12:00 would run past the end.
    let slots = generate_slots(at(9, 0), at(12, 30), minutes(60));

    assert_eq!(slots, vec![at(9, 0), at(10, 0), at(11, 0)]);
}

#[rstest]
#[case(at(9, 0), at(17, 0), 60, 8)]
#[case(at(9, 0), at(17, 0), 30, 16)]
#[case(at(9, 0), at(17, 0), 90, 5)]
#[case(at(16, 0), at(20, 0), 60, 4)]
#[case(at(8, 0), at(8, 45), 45, 1)]
fn test_slot_count_matches_window(
    #[case] start: NaiveTime,
    #[case] end: NaiveTime,
    #[case] duration_minutes: u32,
    #[case] expected_count: usize,
) {
    let slots = generate_slots(start, end, minutes(duration_minutes));

    assert_eq!(slots.len(), expected_count);

    // Every slot starts within [start, end - duration] and the sequence is
    // strictly increasing.
    let step = minutes(duration_minutes).as_chrono();
    for slot in &slots {
        assert!(*slot >= start);
        assert!(*slot + step <= end);
    }
    for pair in slots.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_window_shorter_than_one_session_is_empty() {
    let slots = generate_slots(at(9, 0), at(9, 30), minutes(60));

    assert!(slots.is_empty());
}

#[test]
fn test_end_before_start_is_empty_not_an_error() {
    let slots = generate_slots(at(17, 0), at(9, 0), minutes(60));

    assert!(slots.is_empty());
}

#[test]
fn test_end_equal_to_start_is_empty() {
    let slots = generate_slots(at(9, 0), at(9, 0), minutes(60));

    assert!(slots.is_empty());
}

#[test]
fn test_zero_duration_is_rejected_at_construction() {
    let result = SlotDuration::from_minutes(0);

    assert!(matches!(
        result,
        Err(slotbook_core::errors::BookingError::InvalidRange(_))
    ));
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_slots(at(10, 0), at(18, 0), minutes(45));
    let second = generate_slots(at(10, 0), at(18, 0), minutes(45));

    assert_eq!(first, second);
}
