//! Weekly rule and date override routes.

use std::sync::Arc;

use axum::{routing::put, Router};

use crate::handlers::schedule::{
    list_date_overrides, list_weekly_rules, upsert_date_override, upsert_weekly_rule,
};
use crate::ApiState;

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/organizations/:id/weekly-rules",
            put(upsert_weekly_rule).get(list_weekly_rules),
        )
        .route(
            "/api/organizations/:id/date-overrides",
            put(upsert_date_override).get(list_date_overrides),
        )
}
