//! Day availability route.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::availability::get_availability;
use crate::ApiState;

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/organizations/:id/availability",
        get(get_availability),
    )
}
