use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Length of one bookable session, in whole minutes. Always positive:
/// the only way to construct one is [`SlotDuration::from_minutes`], which
/// rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlotDuration(u32);

impl SlotDuration {
    pub fn from_minutes(minutes: u32) -> BookingResult<Self> {
        if minutes == 0 {
            return Err(BookingError::InvalidRange(
                "session duration must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_chrono(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

/// Deserializes from a bare minute count, routed through
/// [`SlotDuration::from_minutes`] so a zero duration is rejected at the
/// serde boundary too.
impl<'de> Deserialize<'de> for SlotDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = u32::deserialize(deserializer)?;
        Self::from_minutes(minutes).map_err(serde::de::Error::custom)
    }
}

/// A recurring availability definition for one weekday.
///
/// `day_of_week` follows `chrono::Weekday::num_days_from_monday`:
/// 0 = Monday .. 6 = Sunday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRule {
    pub organization_id: Uuid,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: u32,
    pub duration: SlotDuration,
}

/// A per-date schedule record that takes precedence over the weekly rule.
/// Carries no duration of its own; resolution applies the 60-minute default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateOverride {
    pub organization_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// `None` means "use the default of 1".
    pub max_sessions: Option<u32>,
}

/// The effective availability for one organization on one calendar date,
/// derived fresh per request by the schedule rule resolver.
///
/// Invariant: `start < end` (enforced by [`DaySchedule::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub max_sessions: u32,
    pub duration: SlotDuration,
}

impl DaySchedule {
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        max_sessions: u32,
        duration: SlotDuration,
    ) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::InvalidSchedule(format!(
                "schedule start {} must be before end {}",
                start, end
            )));
        }
        Ok(Self {
            start,
            end,
            max_sessions,
            duration,
        })
    }
}

/// Outcome of schedule resolution for an organization+date. `NotScheduled`
/// is a legitimate "no availability" result, not an error; callers must
/// distinguish it from a resolved schedule whose slots are all booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleResolution {
    Scheduled(DaySchedule),
    NotScheduled,
}

impl ScheduleResolution {
    pub fn scheduled(self) -> Option<DaySchedule> {
        match self {
            Self::Scheduled(schedule) => Some(schedule),
            Self::NotScheduled => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertWeeklyRuleRequest {
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: u32,
    pub session_duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRuleResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: u32,
    pub session_duration_minutes: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertDateOverrideRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateOverrideResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: Option<u32>,
}

/// Day availability as surfaced to the booking flow.
///
/// `scheduled == false` means no weekly rule or override exists for the date;
/// `scheduled == true` with an empty `available_slots` means the day is
/// resolvable but nothing more can be booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAvailabilityResponse {
    pub organization_id: Uuid,
    pub date: NaiveDate,
    pub scheduled: bool,
    pub session_duration_minutes: Option<u32>,
    pub max_sessions: Option<u32>,
    pub booked_count: usize,
    pub available_slots: Vec<NaiveTime>,
}
