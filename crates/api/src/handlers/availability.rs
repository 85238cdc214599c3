//! Handler for the day availability endpoint.
//!
//! Availability is never stored: each request resolves the effective
//! schedule for the date (override first, weekly rule second), reads the
//! active booked set, and recomputes the offerable slots from scratch.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use slotbook_core::models::schedule::{GetAvailabilityResponse, ScheduleResolution};
use slotbook_core::scheduling::{available_slots, generate_slots, resolve_day_schedule, weekday_index};
use slotbook_db::repositories::booking as bookings;
use slotbook_db::repositories::schedule as schedules;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

/// Resolves the effective schedule for one organization+date.
///
/// Shared with the booking handler so that the availability shown to a
/// client and the schedule a booking is committed against come from the
/// same resolution rule.
pub(crate) async fn resolve_for_date(
    state: &ApiState,
    organization_id: Uuid,
    date: NaiveDate,
) -> Result<ScheduleResolution, AppError> {
    let date_override = schedules::get_date_override(&state.db_pool, organization_id, date)
        .await?
        .map(|record| record.to_override());

    let weekly_rule =
        schedules::get_weekly_rule(&state.db_pool, organization_id, weekday_index(date) as i16)
            .await?
            .map(|row| row.to_rule())
            .transpose()?;

    let resolution = resolve_day_schedule(date_override.as_ref(), weekly_rule.as_ref())?;

    Ok(resolution)
}

/// Reports the bookable slots for one organization on one date.
///
/// A date with no override and no weekly rule reports `scheduled: false`;
/// a fully booked (or gap-blocked) date reports `scheduled: true` with an
/// empty slot list.
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    let date = query.date;

    let schedule = match resolve_for_date(&state, organization_id, date).await? {
        ScheduleResolution::Scheduled(schedule) => schedule,
        ScheduleResolution::NotScheduled => {
            return Ok(Json(GetAvailabilityResponse {
                organization_id,
                date,
                scheduled: false,
                session_duration_minutes: None,
                max_sessions: None,
                booked_count: 0,
                available_slots: Vec::new(),
            }));
        }
    };

    let booked = bookings::get_active_slots(&state.db_pool, organization_id, date).await?;
    let all_slots = generate_slots(schedule.start, schedule.end, schedule.duration);
    let open = available_slots(&all_slots, schedule.max_sessions, &booked, schedule.duration);

    tracing::debug!(
        "Availability: org={}, date={}, booked={}, open={}",
        organization_id,
        date,
        booked.len(),
        open.len()
    );

    Ok(Json(GetAvailabilityResponse {
        organization_id,
        date,
        scheduled: true,
        session_duration_minutes: Some(schedule.duration.minutes()),
        max_sessions: Some(schedule.max_sessions),
        booked_count: booked.len(),
        available_slots: open,
    }))
}
