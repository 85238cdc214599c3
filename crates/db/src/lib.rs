//! # Slotbook DB
//!
//! The booking ledger: Postgres-backed storage for organizations, weekly
//! rules, date overrides, and bookings. The core algorithms never touch the
//! database directly; they consume the values these repositories produce.

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
