use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use slotbook_core::errors::BookingError;
use slotbook_core::models::schedule::{
    DateOverride, DaySchedule, ScheduleResolution, SlotDuration, WeeklyRule,
};
use slotbook_core::scheduling::{resolve_day_schedule, weekday_index};
use uuid::Uuid;

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn tuesday_rule(org: Uuid) -> WeeklyRule {
    WeeklyRule {
        organization_id: org,
        day_of_week: 1,
        start_time: at(9),
        end_time: at(17),
        max_sessions: 6,
        duration: SlotDuration::from_minutes(90).unwrap(),
    }
}

fn override_for(org: Uuid, date: NaiveDate, max_sessions: Option<u32>) -> DateOverride {
    DateOverride {
        organization_id: org,
        date,
        start_time: at(12),
        end_time: at(15),
        max_sessions,
    }
}

#[test]
fn test_override_wins_over_weekly_rule() {
    let org = Uuid::new_v4();
    // 2025-06-10 is a Tuesday.
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    assert_eq!(weekday_index(date), 1);

    let resolution = resolve_day_schedule(
        Some(&override_for(org, date, Some(2))),
        Some(&tuesday_rule(org)),
    )
    .unwrap();

    let expected = DaySchedule::new(
        at(12),
        at(15),
        2,
        SlotDuration::from_minutes(60).unwrap(),
    )
    .unwrap();
    assert_eq!(resolution, ScheduleResolution::Scheduled(expected));
}

#[test]
fn test_other_dates_fall_back_to_weekly_rule() {
    let org = Uuid::new_v4();

    let resolution = resolve_day_schedule(None, Some(&tuesday_rule(org))).unwrap();

    // The weekly rule's full tuple is returned verbatim.
    let expected = DaySchedule::new(
        at(9),
        at(17),
        6,
        SlotDuration::from_minutes(90).unwrap(),
    )
    .unwrap();
    assert_eq!(resolution, ScheduleResolution::Scheduled(expected));
}

#[test]
fn test_override_defaults_when_max_sessions_unset() {
    let org = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    let resolution = resolve_day_schedule(Some(&override_for(org, date, None)), None).unwrap();

    let schedule = resolution.scheduled().unwrap();
    assert_eq!(schedule.max_sessions, 1);
    assert_eq!(schedule.duration.minutes(), 60);
}

#[test]
fn test_not_scheduled_is_an_outcome_not_an_error() {
    let resolution = resolve_day_schedule(None, None).unwrap();

    assert_eq!(resolution, ScheduleResolution::NotScheduled);
    assert_eq!(resolution.scheduled(), None);
}

#[test]
fn test_inverted_window_is_rejected() {
    let org = Uuid::new_v4();
    let mut rule = tuesday_rule(org);
    rule.start_time = at(18);

    let result = resolve_day_schedule(None, Some(&rule));

    assert!(matches!(result, Err(BookingError::InvalidSchedule(_))));
}

#[test]
fn test_weekday_index_is_monday_based() {
    // 2025-06-09 is a Monday.
    let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    assert_eq!(weekday_index(monday), 0);
    assert_eq!(weekday_index(sunday), 6);
}
