//! `PostgreSQL` repository implementation for organization storage.

use super::{
    models::{NewOrganizationRow, OrganizationRow},
    schema::organizations,
};
use crate::email::EmailAddress;
use crate::organization::{
    domain::{
        Organization, OrganizationId, OrganizationName, OrganizationSlug,
        PersistedOrganizationData,
    },
    ports::{OrganizationRepository, OrganizationRepositoryError, OrganizationRepositoryResult},
};
use crate::persistence::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Name of the unique index guarding organization slugs.
const SLUG_UNIQUE_INDEX: &str = "idx_organizations_slug_unique";

/// `PostgreSQL`-backed organization repository.
#[derive(Debug, Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn store(&self, organization: &Organization) -> OrganizationRepositoryResult<()> {
        let organization_id = organization.id();
        let slug = organization.slug().clone();
        let new_row = to_new_row(organization);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(organizations::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_slug_unique_violation(info.as_ref()) =>
                    {
                        OrganizationRepositoryError::DuplicateSlug(slug.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        OrganizationRepositoryError::DuplicateOrganization(organization_id)
                    }
                    _ => OrganizationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: OrganizationId,
    ) -> OrganizationRepositoryResult<Option<Organization>> {
        run_blocking(&self.pool, move |connection| {
            let row = organizations::table
                .filter(organizations::id.eq(id.into_inner()))
                .select(OrganizationRow::as_select())
                .first::<OrganizationRow>(connection)
                .optional()
                .map_err(OrganizationRepositoryError::persistence)?;
            row.map(row_to_organization).transpose()
        })
        .await
    }

    async fn find_by_slug(
        &self,
        slug: &OrganizationSlug,
    ) -> OrganizationRepositoryResult<Option<Organization>> {
        let lookup_slug = slug.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = organizations::table
                .filter(organizations::slug.eq(lookup_slug))
                .select(OrganizationRow::as_select())
                .first::<OrganizationRow>(connection)
                .optional()
                .map_err(OrganizationRepositoryError::persistence)?;
            row.map(row_to_organization).transpose()
        })
        .await
    }

    async fn list_all(&self) -> OrganizationRepositoryResult<Vec<Organization>> {
        run_blocking(&self.pool, move |connection| {
            organizations::table
                .order((organizations::created_at.asc(), organizations::id.asc()))
                .select(OrganizationRow::as_select())
                .load::<OrganizationRow>(connection)
                .map_err(OrganizationRepositoryError::persistence)?
                .into_iter()
                .map(row_to_organization)
                .collect()
        })
        .await
    }
}

fn to_new_row(organization: &Organization) -> NewOrganizationRow {
    NewOrganizationRow {
        id: organization.id().into_inner(),
        name: organization.name().as_str().to_owned(),
        slug: organization.slug().as_str().to_owned(),
        contact_email: organization
            .contact_email()
            .map(|email| email.as_str().to_owned()),
        created_at: organization.created_at(),
    }
}

fn row_to_organization(row: OrganizationRow) -> OrganizationRepositoryResult<Organization> {
    let OrganizationRow {
        id,
        name,
        slug,
        contact_email,
        created_at,
    } = row;

    let data = PersistedOrganizationData {
        id: OrganizationId::from_uuid(id),
        name: OrganizationName::new(name).map_err(OrganizationRepositoryError::persistence)?,
        slug: OrganizationSlug::parse(slug).map_err(OrganizationRepositoryError::persistence)?,
        contact_email: contact_email
            .map(EmailAddress::new)
            .transpose()
            .map_err(OrganizationRepositoryError::persistence)?,
        created_at,
    };
    Ok(Organization::from_persisted(data))
}

fn is_slug_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == SLUG_UNIQUE_INDEX)
}
