//! Handlers for organization registration and lookup.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use slotbook_core::errors::BookingError;
use slotbook_core::models::organization::{CreateOrganizationRequest, OrganizationResponse};
use slotbook_db::models::DbOrganization;
use slotbook_db::repositories::organization as organizations;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

fn to_response(org: DbOrganization) -> OrganizationResponse {
    OrganizationResponse {
        id: org.id,
        name: org.name,
        address: org.address,
        contact_info: org.contact_info,
        description: org.description,
        unique_code: org.unique_code,
        is_active: org.is_active,
        created_at: org.created_at,
    }
}

/// Registers a new organization and returns it with its generated unique
/// code.
pub async fn create_organization(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<OrganizationResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "organization name must not be empty".to_string(),
        )));
    }
    if request.admin_external_id.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "admin_external_id must not be empty".to_string(),
        )));
    }

    let org = organizations::create_organization(
        &state.db_pool,
        &request.name,
        request.address.as_deref(),
        request.contact_info.as_deref(),
        request.description.as_deref(),
        &request.admin_external_id,
    )
    .await?;

    tracing::info!("Organization created: id={}, name={}", org.id, org.name);

    Ok((StatusCode::CREATED, Json(to_response(org))))
}

/// Looks up an organization by its id.
pub async fn get_organization(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrganizationResponse>, AppError> {
    let org = organizations::get_organization_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!("organization {}", id)))
        })?;

    Ok(Json(to_response(org)))
}

/// Looks up an organization by the short code clients type in.
pub async fn get_organization_by_code(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<OrganizationResponse>, AppError> {
    let org = organizations::get_organization_by_code(&state.db_pool, &code)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "organization with code {}",
                code
            )))
        })?;

    Ok(Json(to_response(org)))
}

/// Looks up the organization owned by an administrator.
pub async fn get_organization_by_admin(
    State(state): State<Arc<ApiState>>,
    Path(admin_external_id): Path<String>,
) -> Result<Json<OrganizationResponse>, AppError> {
    let org = organizations::get_organization_by_admin(&state.db_pool, &admin_external_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "organization administered by {}",
                admin_external_id
            )))
        })?;

    Ok(Json(to_response(org)))
}
