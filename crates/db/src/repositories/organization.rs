use crate::models::DbOrganization;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_organization(
    pool: &Pool<Postgres>,
    name: &str,
    address: Option<&str>,
    contact_info: Option<&str>,
    description: Option<&str>,
    admin_external_id: &str,
) -> Result<DbOrganization> {
    let id = Uuid::new_v4();
    // Short code clients type to find the organization.
    let unique_code = Uuid::new_v4().simple().to_string()[..8].to_string();
    let now = Utc::now();

    tracing::debug!(
        "Creating organization: id={}, name={}, code={}",
        id,
        name,
        unique_code
    );

    let organization = sqlx::query_as::<_, DbOrganization>(
        r#"
        INSERT INTO organizations (id, name, address, contact_info, description, admin_external_id, unique_code, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8)
        RETURNING id, name, address, contact_info, description, admin_external_id, unique_code, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(address)
    .bind(contact_info)
    .bind(description)
    .bind(admin_external_id)
    .bind(&unique_code)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(organization)
}

pub async fn get_organization_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbOrganization>> {
    let organization = sqlx::query_as::<_, DbOrganization>(
        r#"
        SELECT id, name, address, contact_info, description, admin_external_id, unique_code, is_active, created_at
        FROM organizations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(organization)
}

pub async fn get_organization_by_code(
    pool: &Pool<Postgres>,
    unique_code: &str,
) -> Result<Option<DbOrganization>> {
    let organization = sqlx::query_as::<_, DbOrganization>(
        r#"
        SELECT id, name, address, contact_info, description, admin_external_id, unique_code, is_active, created_at
        FROM organizations
        WHERE unique_code = $1
        "#,
    )
    .bind(unique_code)
    .fetch_optional(pool)
    .await?;

    Ok(organization)
}

pub async fn get_organization_by_admin(
    pool: &Pool<Postgres>,
    admin_external_id: &str,
) -> Result<Option<DbOrganization>> {
    let organization = sqlx::query_as::<_, DbOrganization>(
        r#"
        SELECT id, name, address, contact_info, description, admin_external_id, unique_code, is_active, created_at
        FROM organizations
        WHERE admin_external_id = $1
        "#,
    )
    .bind(admin_external_id)
    .fetch_optional(pool)
    .await?;

    Ok(organization)
}
