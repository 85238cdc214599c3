use crate::models::DbBooking;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::schedule::DaySchedule;
use slotbook_core::scheduling::{available_slots, generate_slots};

fn db_err(err: sqlx::Error) -> BookingError {
    BookingError::Database(err.into())
}

/// Start times of the active bookings for one organization+date, i.e. the
/// booked set the availability resolver runs against.
pub async fn get_active_slots(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<NaiveTime>> {
    let slots: Vec<NaiveTime> = sqlx::query_scalar(
        r#"
        SELECT start_time
        FROM bookings
        WHERE organization_id = $1 AND booking_date = $2 AND status = 'active'
        ORDER BY start_time ASC
        "#,
    )
    .bind(organization_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Commits one booking, atomically with respect to other bookings on the
/// same organization+date.
///
/// The whole read-recheck-insert sequence runs inside a single transaction
/// holding an advisory lock keyed by organization+date, so two concurrent
/// requests cannot both pass the availability check against a stale booked
/// set and then both commit. The availability decision is re-taken here from
/// the resolved `schedule`; the caller's earlier check was only advisory.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    schedule: &DaySchedule,
    client_external_id: &str,
    client_name: Option<&str>,
    service_type: Option<&str>,
) -> BookingResult<DbBooking> {
    let mut tx = pool.begin().await.map_err(db_err)?;

    // Serialize bookings per organization+date for the rest of the
    // transaction.
    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1 || '/' || $2, 0))")
        .bind(organization_id.to_string())
        .bind(date.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

    let booked: Vec<NaiveTime> = sqlx::query_scalar(
        r#"
        SELECT start_time
        FROM bookings
        WHERE organization_id = $1 AND booking_date = $2 AND status = 'active'
        "#,
    )
    .bind(organization_id)
    .bind(date)
    .fetch_all(&mut *tx)
    .await
    .map_err(db_err)?;

    let all_slots = generate_slots(schedule.start, schedule.end, schedule.duration);
    let open = available_slots(&all_slots, schedule.max_sessions, &booked, schedule.duration);
    if !open.contains(&start_time) {
        return Err(BookingError::SlotUnavailable(format!(
            "slot {} on {} can no longer be booked",
            start_time, date
        )));
    }

    let end_time = start_time + schedule.duration.as_chrono();
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, organization_id, client_external_id, client_name, booking_date, start_time, end_time, status, service_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8, $9)
        RETURNING id, organization_id, client_external_id, client_name, booking_date, start_time, end_time, status, service_type, created_at, cancelled_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(organization_id)
    .bind(client_external_id)
    .bind(client_name)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(service_type)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(db_err)?;

    tx.commit().await.map_err(db_err)?;

    tracing::debug!(
        "Booking committed: id={}, org={}, date={}, start={}",
        booking.id,
        organization_id,
        date,
        start_time
    );

    Ok(booking)
}

/// Cancels an active booking. Only the booking's owner may cancel; returns
/// false when no matching active booking exists.
pub async fn cancel_booking(
    pool: &Pool<Postgres>,
    booking_id: Uuid,
    requester_external_id: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET status = 'cancelled', cancelled_at = NOW()
        WHERE id = $1 AND client_external_id = $2 AND status = 'active'
        "#,
    )
    .bind(booking_id)
    .bind(requester_external_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn get_client_bookings(
    pool: &Pool<Postgres>,
    client_external_id: &str,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, organization_id, client_external_id, client_name, booking_date, start_time, end_time, status, service_type, created_at, cancelled_at
        FROM bookings
        WHERE client_external_id = $1 AND status = 'active'
        ORDER BY booking_date ASC, start_time ASC
        "#,
    )
    .bind(client_external_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_organization_bookings(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, organization_id, client_external_id, client_name, booking_date, start_time, end_time, status, service_type, created_at, cancelled_at
        FROM bookings
        WHERE organization_id = $1 AND status = 'active'
        ORDER BY booking_date ASC, start_time ASC
        "#,
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
