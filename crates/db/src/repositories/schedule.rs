use crate::models::{DbDateOverride, DbWeeklyRule};
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn upsert_weekly_rule(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    max_sessions: i32,
    session_duration_minutes: i32,
) -> Result<DbWeeklyRule> {
    tracing::debug!(
        "Upserting weekly rule: org={}, day_of_week={}",
        organization_id,
        day_of_week
    );

    let rule = sqlx::query_as::<_, DbWeeklyRule>(
        r#"
        INSERT INTO weekly_rules (id, organization_id, day_of_week, start_time, end_time, max_sessions, session_duration_minutes, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        ON CONFLICT (organization_id, day_of_week) DO UPDATE
            SET start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                max_sessions = EXCLUDED.max_sessions,
                session_duration_minutes = EXCLUDED.session_duration_minutes,
                is_active = TRUE
        RETURNING id, organization_id, day_of_week, start_time, end_time, max_sessions, session_duration_minutes, is_active
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(organization_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(max_sessions)
    .bind(session_duration_minutes)
    .fetch_one(pool)
    .await?;

    Ok(rule)
}

/// The active weekly rule for one weekday, if any.
pub async fn get_weekly_rule(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    day_of_week: i16,
) -> Result<Option<DbWeeklyRule>> {
    let rule = sqlx::query_as::<_, DbWeeklyRule>(
        r#"
        SELECT id, organization_id, day_of_week, start_time, end_time, max_sessions, session_duration_minutes, is_active
        FROM weekly_rules
        WHERE organization_id = $1 AND day_of_week = $2 AND is_active = TRUE
        "#,
    )
    .bind(organization_id)
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(rule)
}

pub async fn list_weekly_rules(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
) -> Result<Vec<DbWeeklyRule>> {
    let rules = sqlx::query_as::<_, DbWeeklyRule>(
        r#"
        SELECT id, organization_id, day_of_week, start_time, end_time, max_sessions, session_duration_minutes, is_active
        FROM weekly_rules
        WHERE organization_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await?;

    Ok(rules)
}

pub async fn upsert_date_override(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    max_sessions: Option<i32>,
) -> Result<DbDateOverride> {
    tracing::debug!(
        "Upserting date override: org={}, date={}",
        organization_id,
        date
    );

    let record = sqlx::query_as::<_, DbDateOverride>(
        r#"
        INSERT INTO date_overrides (id, organization_id, date, start_time, end_time, max_sessions)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (organization_id, date) DO UPDATE
            SET start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                max_sessions = EXCLUDED.max_sessions
        RETURNING id, organization_id, date, start_time, end_time, max_sessions
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(organization_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(max_sessions)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// The date-specific override for one date, if any. Checked before the
/// weekly rule during schedule resolution.
pub async fn get_date_override(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
    date: NaiveDate,
) -> Result<Option<DbDateOverride>> {
    let record = sqlx::query_as::<_, DbDateOverride>(
        r#"
        SELECT id, organization_id, date, start_time, end_time, max_sessions
        FROM date_overrides
        WHERE organization_id = $1 AND date = $2
        "#,
    )
    .bind(organization_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn list_date_overrides(
    pool: &Pool<Postgres>,
    organization_id: Uuid,
) -> Result<Vec<DbDateOverride>> {
    let records = sqlx::query_as::<_, DbDateOverride>(
        r#"
        SELECT id, organization_id, date, start_time, end_time, max_sessions
        FROM date_overrides
        WHERE organization_id = $1
        ORDER BY date ASC
        "#,
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
