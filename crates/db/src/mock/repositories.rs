use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use slotbook_core::errors::BookingResult;
use slotbook_core::models::schedule::DaySchedule;

use crate::models::{DbBooking, DbDateOverride, DbOrganization, DbWeeklyRule};

// Mock repositories for testing
mock! {
    pub OrganizationRepo {
        pub async fn create_organization(
            &self,
            name: &'static str,
            address: Option<&'static str>,
            contact_info: Option<&'static str>,
            description: Option<&'static str>,
            admin_external_id: &'static str,
        ) -> eyre::Result<DbOrganization>;

        pub async fn get_organization_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbOrganization>>;

        pub async fn get_organization_by_code(
            &self,
            unique_code: &'static str,
        ) -> eyre::Result<Option<DbOrganization>>;
    }
}

mock! {
    pub ScheduleRepo {
        pub async fn upsert_weekly_rule(
            &self,
            organization_id: Uuid,
            day_of_week: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
            max_sessions: i32,
            session_duration_minutes: i32,
        ) -> eyre::Result<DbWeeklyRule>;

        pub async fn get_weekly_rule(
            &self,
            organization_id: Uuid,
            day_of_week: i16,
        ) -> eyre::Result<Option<DbWeeklyRule>>;

        pub async fn get_date_override(
            &self,
            organization_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Option<DbDateOverride>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn get_active_slots(
            &self,
            organization_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<NaiveTime>>;

        pub async fn create_booking(
            &self,
            organization_id: Uuid,
            date: NaiveDate,
            start_time: NaiveTime,
            schedule: DaySchedule,
            client_external_id: &'static str,
        ) -> BookingResult<DbBooking>;

        pub async fn cancel_booking(
            &self,
            booking_id: Uuid,
            requester_external_id: &'static str,
        ) -> eyre::Result<bool>;
    }
}
