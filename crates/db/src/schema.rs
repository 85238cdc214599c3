use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create organizations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS organizations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address VARCHAR(255) NULL,
            contact_info VARCHAR(255) NULL,
            description TEXT NULL,
            admin_external_id VARCHAR(255) NOT NULL,
            unique_code VARCHAR(16) NOT NULL UNIQUE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weekly_rules table (day_of_week: 0 = Monday .. 6 = Sunday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_rules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            organization_id UUID NOT NULL REFERENCES organizations(id),
            day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            max_sessions INTEGER NOT NULL DEFAULT 1 CHECK (max_sessions >= 0),
            session_duration_minutes INTEGER NOT NULL DEFAULT 60 CHECK (session_duration_minutes > 0),
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT weekly_rules_valid_window CHECK (end_time > start_time),
            CONSTRAINT weekly_rules_one_per_day UNIQUE (organization_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create date_overrides table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS date_overrides (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            organization_id UUID NOT NULL REFERENCES organizations(id),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            max_sessions INTEGER NULL CHECK (max_sessions >= 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT date_overrides_valid_window CHECK (end_time > start_time),
            CONSTRAINT date_overrides_one_per_date UNIQUE (organization_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            organization_id UUID NOT NULL REFERENCES organizations(id),
            client_external_id VARCHAR(255) NOT NULL,
            client_name VARCHAR(255) NULL,
            booking_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'active',
            service_type VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            cancelled_at TIMESTAMP WITH TIME ZONE NULL,
            CONSTRAINT bookings_valid_window CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One active booking per organization+date+start; cancelled rows release
    // the slot, so the index is partial.
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_active_slot
            ON bookings(organization_id, booking_date, start_time)
            WHERE status = 'active';
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_weekly_rules_organization_id ON weekly_rules(organization_id);
        CREATE INDEX IF NOT EXISTS idx_date_overrides_organization_id ON date_overrides(organization_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_organization_date ON bookings(organization_id, booking_date);
        CREATE INDEX IF NOT EXISTS idx_bookings_client ON bookings(client_external_id);
        CREATE INDEX IF NOT EXISTS idx_organizations_unique_code ON organizations(unique_code);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
