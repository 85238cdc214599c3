//! Booking routes.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::booking::{
    cancel_booking, create_booking, list_client_bookings, list_organization_bookings,
};
use crate::ApiState;

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/organizations/:id/bookings",
            post(create_booking).get(list_organization_bookings),
        )
        .route(
            "/api/clients/:external_id/bookings",
            get(list_client_bookings),
        )
        .route("/api/bookings/:id", delete(cancel_booking))
}
