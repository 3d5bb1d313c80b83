//! Diesel row models for organization persistence.

use super::schema::organizations;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for organization records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = organizations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrganizationRow {
    /// Organization identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Optional contact address.
    pub contact_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for organization records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganizationRow {
    /// Organization identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Optional contact address.
    pub contact_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
