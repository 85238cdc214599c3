//! Handlers for booking creation, listing and cancellation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use slotbook_core::errors::BookingError;
use slotbook_core::models::booking::{
    Booking, BookingResponse, CancelBookingRequest, CancelBookingResponse, CreateBookingRequest,
};
use slotbook_core::models::schedule::ScheduleResolution;
use slotbook_core::scheduling::generate_slots;
use slotbook_db::repositories::booking as bookings;
use slotbook_db::repositories::organization as organizations;

use crate::handlers::availability::resolve_for_date;
use crate::middleware::error_handling::AppError;
use crate::ApiState;

fn to_response(booking: Booking) -> BookingResponse {
    BookingResponse {
        id: booking.id,
        organization_id: booking.organization_id,
        date: booking.date,
        start_time: booking.start_time,
        end_time: booking.end_time,
        status: booking.status,
        service_type: booking.service_type,
        created_at: booking.created_at,
    }
}

/// Books one slot for a client.
///
/// The handler checks that the requested start time belongs to the resolved
/// slot grid; the availability decision itself (capacity and gap rules) is
/// taken inside the ledger's transaction, under the per-organization+date
/// lock, against the booked set as of commit time.
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    if request.client_external_id.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "client_external_id must not be empty".to_string(),
        )));
    }

    let org = organizations::get_organization_by_id(&state.db_pool, organization_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "organization {}",
                organization_id
            )))
        })?;
    if !org.is_active {
        return Err(AppError(BookingError::Validation(format!(
            "organization {} is not accepting bookings",
            organization_id
        ))));
    }

    let schedule = match resolve_for_date(&state, organization_id, request.date).await? {
        ScheduleResolution::Scheduled(schedule) => schedule,
        ScheduleResolution::NotScheduled => {
            return Err(AppError(BookingError::Validation(format!(
                "no schedule is configured for {}",
                request.date
            ))));
        }
    };

    // Off-grid times are a client error, not a lost race.
    let all_slots = generate_slots(schedule.start, schedule.end, schedule.duration);
    if !all_slots.contains(&request.start_time) {
        return Err(AppError(BookingError::Validation(format!(
            "{} is not a valid slot start on {}",
            request.start_time, request.date
        ))));
    }

    let booking = bookings::create_booking(
        &state.db_pool,
        organization_id,
        request.date,
        request.start_time,
        &schedule,
        &request.client_external_id,
        request.client_name.as_deref(),
        request.service_type.as_deref(),
    )
    .await
    .map_err(AppError)?
    .to_booking()
    .map_err(AppError)?;

    tracing::info!(
        "Booking created: id={}, org={}, date={}, start={}",
        booking.id,
        organization_id,
        booking.date,
        booking.start_time
    );

    Ok((StatusCode::CREATED, Json(to_response(booking))))
}

/// Lists an organization's active bookings in chronological order.
pub async fn list_organization_bookings(
    State(state): State<Arc<ApiState>>,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    organizations::get_organization_by_id(&state.db_pool, organization_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "organization {}",
                organization_id
            )))
        })?;

    let rows = bookings::get_organization_bookings(&state.db_pool, organization_id).await?;

    let mut responses = Vec::with_capacity(rows.len());
    for row in rows {
        responses.push(to_response(row.to_booking().map_err(AppError)?));
    }

    Ok(Json(responses))
}

/// Lists a client's active bookings across all organizations.
pub async fn list_client_bookings(
    State(state): State<Arc<ApiState>>,
    Path(client_external_id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let rows = bookings::get_client_bookings(&state.db_pool, &client_external_id).await?;

    let mut responses = Vec::with_capacity(rows.len());
    for row in rows {
        responses.push(to_response(row.to_booking().map_err(AppError)?));
    }

    Ok(Json(responses))
}

/// Cancels a booking on behalf of the client that made it. Cancelling frees
/// the slot for subsequent availability queries.
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<CancelBookingRequest>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let cancelled = bookings::cancel_booking(
        &state.db_pool,
        booking_id,
        &request.requester_external_id,
    )
    .await?;

    if !cancelled {
        return Err(AppError(BookingError::NotFound(format!(
            "active booking {} for requester",
            booking_id
        ))));
    }

    tracing::info!("Booking cancelled: id={}", booking_id);

    Ok(Json(CancelBookingResponse { cancelled: true }))
}
