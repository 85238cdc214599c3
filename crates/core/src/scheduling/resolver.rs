use chrono::{Datelike, NaiveDate};

use crate::errors::BookingResult;
use crate::models::schedule::{
    DateOverride, DaySchedule, ScheduleResolution, SlotDuration, WeeklyRule,
};

/// Overrides carry no duration of their own; this fixed default applies.
pub const OVERRIDE_SESSION_DURATION_MINUTES: u32 = 60;
/// Applied when an override leaves `max_sessions` unset.
pub const OVERRIDE_DEFAULT_MAX_SESSIONS: u32 = 1;

/// Weekday index used throughout the system: 0 = Monday .. 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Determines the effective day schedule for an organization+date.
///
/// A date-specific override always wins over the weekly recurring rule; the
/// caller is expected to have looked both records up from the ledger (the
/// weekly rule by [`weekday_index`], active rules only). When neither exists
/// the outcome is [`ScheduleResolution::NotScheduled`], which callers must
/// present as "no availability" rather than treat as an error.
///
/// Fails only when a record violates the `start < end` invariant, which the
/// ledger schema also rejects.
pub fn resolve_day_schedule(
    date_override: Option<&DateOverride>,
    weekly_rule: Option<&WeeklyRule>,
) -> BookingResult<ScheduleResolution> {
    if let Some(record) = date_override {
        let schedule = DaySchedule::new(
            record.start_time,
            record.end_time,
            record.max_sessions.unwrap_or(OVERRIDE_DEFAULT_MAX_SESSIONS),
            SlotDuration::from_minutes(OVERRIDE_SESSION_DURATION_MINUTES)?,
        )?;
        return Ok(ScheduleResolution::Scheduled(schedule));
    }

    if let Some(rule) = weekly_rule {
        let schedule = DaySchedule::new(
            rule.start_time,
            rule.end_time,
            rule.max_sessions,
            rule.duration,
        )?;
        return Ok(ScheduleResolution::Scheduled(schedule));
    }

    Ok(ScheduleResolution::NotScheduled)
}
