use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::booking::{Booking, BookingStatus};
use slotbook_core::models::schedule::{DateOverride, SlotDuration, WeeklyRule};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbOrganization {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
    pub description: Option<String>,
    pub admin_external_id: String,
    pub unique_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeeklyRule {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: i32,
    pub session_duration_minutes: i32,
    pub is_active: bool,
}

impl DbWeeklyRule {
    /// Maps the row into the domain rule the resolver consumes. Fails on
    /// rows that violate the positive-duration invariant.
    pub fn to_rule(&self) -> BookingResult<WeeklyRule> {
        Ok(WeeklyRule {
            organization_id: self.organization_id,
            day_of_week: self.day_of_week as u8,
            start_time: self.start_time,
            end_time: self.end_time,
            max_sessions: self.max_sessions.max(0) as u32,
            duration: SlotDuration::from_minutes(self.session_duration_minutes.max(0) as u32)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDateOverride {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_sessions: Option<i32>,
}

impl DbDateOverride {
    pub fn to_override(&self) -> DateOverride {
        DateOverride {
            organization_id: self.organization_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            max_sessions: self.max_sessions.map(|n| n.max(0) as u32),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub client_external_id: String,
    pub client_name: Option<String>,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub service_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl DbBooking {
    pub fn to_booking(&self) -> BookingResult<Booking> {
        let status: BookingStatus = self
            .status
            .parse()
            .map_err(|msg: String| BookingError::Internal(msg.into()))?;

        Ok(Booking {
            id: self.id,
            organization_id: self.organization_id,
            client_external_id: self.client_external_id.clone(),
            client_name: self.client_name.clone(),
            date: self.booking_date,
            start_time: self.start_time,
            end_time: self.end_time,
            status,
            service_type: self.service_type.clone(),
            created_at: self.created_at,
            cancelled_at: self.cancelled_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_booking(status: &str) -> DbBooking {
        DbBooking {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            client_external_id: "client-1".to_string(),
            client_name: None,
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            status: status.to_string(),
            service_type: None,
            created_at: Utc::now(),
            cancelled_at: None,
        }
    }

    #[rstest]
    #[case("active", BookingStatus::Active)]
    #[case("cancelled", BookingStatus::Cancelled)]
    #[case("completed", BookingStatus::Completed)]
    fn booking_status_maps_into_domain(#[case] status: &str, #[case] expected: BookingStatus) {
        let booking = sample_booking(status).to_booking().unwrap();
        assert_eq!(booking.status, expected);
    }

    #[test]
    fn unknown_status_row_is_an_internal_error() {
        assert!(sample_booking("paused").to_booking().is_err());
    }

    #[test]
    fn weekly_rule_row_with_zero_duration_is_rejected() {
        let row = DbWeeklyRule {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            day_of_week: 1,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            max_sessions: 4,
            session_duration_minutes: 0,
            is_active: true,
        };

        assert!(row.to_rule().is_err());
    }
}
