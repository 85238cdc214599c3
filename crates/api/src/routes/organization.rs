//! Organization registration and lookup routes.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::organization::{
    create_organization, get_organization, get_organization_by_admin, get_organization_by_code,
};
use crate::ApiState;

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/organizations", post(create_organization))
        .route("/api/organizations/:id", get(get_organization))
        .route("/api/organizations/code/:code", get(get_organization_by_code))
        .route(
            "/api/organizations/admin/:external_id",
            get(get_organization_by_admin),
        )
}
