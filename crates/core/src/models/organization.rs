use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant. All schedule and booking data is partitioned by organization id;
/// slots belonging to different organizations never interact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
    pub description: Option<String>,
    /// Opaque identity of the owning administrator (e.g. a messenger user id).
    pub admin_external_id: String,
    /// Short code clients use to find the organization.
    pub unique_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
    pub description: Option<String>,
    pub admin_external_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
    pub description: Option<String>,
    pub unique_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
