//! Repository port for organization persistence and lookup.

use crate::organization::domain::{Organization, OrganizationId, OrganizationSlug};
use crate::persistence::PersistenceFailure;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for organization repository operations.
pub type OrganizationRepositoryResult<T> = Result<T, OrganizationRepositoryError>;

/// Organization persistence contract.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Stores a new organization.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationRepositoryError::DuplicateOrganization`] when the
    /// identifier already exists or
    /// [`OrganizationRepositoryError::DuplicateSlug`] when another
    /// organization already owns the slug.
    async fn store(&self, organization: &Organization) -> OrganizationRepositoryResult<()>;

    /// Finds an organization by identifier.
    ///
    /// Returns `None` when the organization does not exist.
    async fn find_by_id(
        &self,
        id: OrganizationId,
    ) -> OrganizationRepositoryResult<Option<Organization>>;

    /// Finds an organization by its unique slug.
    ///
    /// Returns `None` when no organization owns the slug.
    async fn find_by_slug(
        &self,
        slug: &OrganizationSlug,
    ) -> OrganizationRepositoryResult<Option<Organization>>;

    /// Returns every organization ordered by creation time.
    async fn list_all(&self) -> OrganizationRepositoryResult<Vec<Organization>>;
}

/// Errors returned by organization repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OrganizationRepositoryError {
    /// An organization with the same identifier already exists.
    #[error("duplicate organization identifier: {0}")]
    DuplicateOrganization(OrganizationId),

    /// An organization with the same slug already exists.
    #[error("duplicate organization slug: {0}")]
    DuplicateSlug(OrganizationSlug),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrganizationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl PersistenceFailure for OrganizationRepositoryError {
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}
