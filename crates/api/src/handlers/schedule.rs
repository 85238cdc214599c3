//! Handlers for weekly rules and date overrides.
//!
//! Rules are validated here before they reach the ledger, so malformed
//! windows (inverted ranges, zero durations, out-of-range weekdays) are
//! rejected with 400 rather than stored and tripped over during resolution.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use slotbook_core::errors::BookingError;
use slotbook_core::models::schedule::{
    DateOverrideResponse, SlotDuration, UpsertDateOverrideRequest, UpsertWeeklyRuleRequest,
    WeeklyRuleResponse,
};
use slotbook_db::models::{DbDateOverride, DbWeeklyRule};
use slotbook_db::repositories::organization as organizations;
use slotbook_db::repositories::schedule as schedules;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

fn rule_response(rule: DbWeeklyRule) -> WeeklyRuleResponse {
    WeeklyRuleResponse {
        id: rule.id,
        organization_id: rule.organization_id,
        day_of_week: rule.day_of_week as u8,
        start_time: rule.start_time,
        end_time: rule.end_time,
        max_sessions: rule.max_sessions.max(0) as u32,
        session_duration_minutes: rule.session_duration_minutes.max(0) as u32,
        is_active: rule.is_active,
    }
}

fn override_response(record: DbDateOverride) -> DateOverrideResponse {
    DateOverrideResponse {
        id: record.id,
        organization_id: record.organization_id,
        date: record.date,
        start_time: record.start_time,
        end_time: record.end_time,
        max_sessions: record.max_sessions.map(|n| n.max(0) as u32),
    }
}

async fn require_organization(state: &ApiState, id: Uuid) -> Result<(), AppError> {
    organizations::get_organization_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError(BookingError::NotFound(format!("organization {}", id))))?;
    Ok(())
}

/// Creates or replaces the weekly rule for one weekday.
pub async fn upsert_weekly_rule(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<UpsertWeeklyRuleRequest>,
) -> Result<Json<WeeklyRuleResponse>, AppError> {
    if request.day_of_week > 6 {
        return Err(AppError(BookingError::Validation(format!(
            "day_of_week must be 0 (Monday) through 6 (Sunday), got {}",
            request.day_of_week
        ))));
    }
    if request.start_time >= request.end_time {
        return Err(AppError(BookingError::InvalidSchedule(format!(
            "start {} must be before end {}",
            request.start_time, request.end_time
        ))));
    }
    // Surfaces the zero-duration case as InvalidRange.
    SlotDuration::from_minutes(request.session_duration_minutes)?;

    require_organization(&state, organization_id).await?;

    let rule = schedules::upsert_weekly_rule(
        &state.db_pool,
        organization_id,
        request.day_of_week as i16,
        request.start_time,
        request.end_time,
        request.max_sessions as i32,
        request.session_duration_minutes as i32,
    )
    .await?;

    Ok(Json(rule_response(rule)))
}

/// Lists every weekly rule an organization has configured, Monday first.
pub async fn list_weekly_rules(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<Vec<WeeklyRuleResponse>>, AppError> {
    require_organization(&state, organization_id).await?;

    let rules = schedules::list_weekly_rules(&state.db_pool, organization_id).await?;

    Ok(Json(rules.into_iter().map(rule_response).collect()))
}

/// Creates or replaces the override for one calendar date. The override
/// takes precedence over the weekly rule during resolution.
pub async fn upsert_date_override(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<UpsertDateOverrideRequest>,
) -> Result<Json<DateOverrideResponse>, AppError> {
    if request.start_time >= request.end_time {
        return Err(AppError(BookingError::InvalidSchedule(format!(
            "start {} must be before end {}",
            request.start_time, request.end_time
        ))));
    }

    require_organization(&state, organization_id).await?;

    let record = schedules::upsert_date_override(
        &state.db_pool,
        organization_id,
        request.date,
        request.start_time,
        request.end_time,
        request.max_sessions.map(|n| n as i32),
    )
    .await?;

    Ok(Json(override_response(record)))
}

/// Lists an organization's date overrides in date order.
pub async fn list_date_overrides(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<Vec<DateOverrideResponse>>, AppError> {
    require_organization(&state, organization_id).await?;

    let records = schedules::list_date_overrides(&state.db_pool, organization_id).await?;

    Ok(Json(records.into_iter().map(override_response).collect()))
}
