use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::models::schedule::SlotDuration;
use slotbook_core::scheduling::has_gap;

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn hour() -> SlotDuration {
    SlotDuration::from_minutes(60).unwrap()
}

#[test]
fn test_empty_set_has_no_gap() {
    assert_eq!(has_gap(&[], hour()), false);
}

#[test]
fn test_single_slot_has_no_gap() {
    assert_eq!(has_gap(&[at(16)], hour()), false);
}

#[test]
fn test_back_to_back_slots_have_no_gap() {
    assert_eq!(has_gap(&[at(16), at(17), at(18)], hour()), false);
}

#[test]
fn test_skipped_slot_is_a_gap() {
    // 16:00 + 18:00 alone: 17:00 was skippable but skipped.
    assert_eq!(has_gap(&[at(16), at(18)], hour()), true);
}

#[test]
fn test_gap_detection_sorts_internally() {
    let ordered = [at(16), at(17), at(18)];
    let shuffled = [at(18), at(16), at(17)];

    assert_eq!(has_gap(&ordered, hour()), has_gap(&shuffled, hour()));

    let gapped_shuffled = [at(19), at(16), at(17)];
    assert_eq!(has_gap(&gapped_shuffled, hour()), true);
}

#[rstest]
#[case(vec![10, 11, 12, 13], false)]
#[case(vec![10, 12], true)]
#[case(vec![10, 11, 13], true)]
#[case(vec![13, 12, 11, 10], false)]
#[case(vec![8, 20], true)]
fn test_hourly_combinations(#[case] hours: Vec<u32>, #[case] expected: bool) {
    let slots: Vec<NaiveTime> = hours.into_iter().map(at).collect();

    assert_eq!(has_gap(&slots, hour()), expected);
}

#[test]
fn test_gap_respects_duration() {
    let half_hour = SlotDuration::from_minutes(30).unwrap();
    let slots = [
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ];

    // One hour apart: adjacent for 60-minute sessions, a window for
    // 30-minute sessions.
    assert_eq!(has_gap(&slots, hour()), false);
    assert_eq!(has_gap(&slots, half_hour), true);
}
