//! Service layer for organization creation and lookup.

use crate::email::EmailAddress;
use crate::organization::{
    domain::{
        Organization, OrganizationDomainError, OrganizationId, OrganizationName,
        OrganizationSlug,
    },
    ports::{OrganizationRepository, OrganizationRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrganizationRequest {
    name: String,
    contact_email: Option<String>,
}

impl CreateOrganizationRequest {
    /// Creates a request with the required organization name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_email: None,
        }
    }

    /// Sets the contact e-mail address. Blank input leaves it unset.
    #[must_use]
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }
}

/// Service-level errors for organization operations.
#[derive(Debug, Error)]
pub enum OrganizationServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] OrganizationDomainError),

    /// Another organization already uses the derived slug.
    #[error("An organization with a similar name already exists.")]
    DuplicateSlug(OrganizationSlug),

    /// The organization does not exist.
    #[error("Organization not found")]
    NotFound,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(OrganizationRepositoryError),
}

impl From<OrganizationRepositoryError> for OrganizationServiceError {
    fn from(err: OrganizationRepositoryError) -> Self {
        match err {
            OrganizationRepositoryError::DuplicateSlug(slug) => Self::DuplicateSlug(slug),
            other => Self::Repository(other),
        }
    }
}

/// Result type for organization service operations.
pub type OrganizationServiceResult<T> = Result<T, OrganizationServiceError>;

/// Organization orchestration service.
pub struct OrganizationService<R, C>
where
    R: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for OrganizationService<R, C>
where
    R: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> OrganizationService<R, C>
where
    R: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new organization service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an organization whose slug is derived from its name.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationServiceError::DuplicateSlug`] when the derived
    /// slug is taken, [`OrganizationServiceError::Domain`] when validation
    /// fails, or [`OrganizationServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(
        &self,
        request: CreateOrganizationRequest,
    ) -> OrganizationServiceResult<Organization> {
        let name = OrganizationName::new(request.name)?;
        let contact_email = request
            .contact_email
            .filter(|value| !value.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()
            .map_err(OrganizationDomainError::from)?;
        let organization = Organization::new(name, contact_email, &*self.clock)?;

        // The storage constraint still decides races between concurrent
        // creations; the repository reports those as `DuplicateSlug` too.
        if self
            .repository
            .find_by_slug(organization.slug())
            .await?
            .is_some()
        {
            return Err(OrganizationServiceError::DuplicateSlug(
                organization.slug().clone(),
            ));
        }

        self.repository.store(&organization).await?;
        tracing::info!(
            organization_id = %organization.id(),
            slug = %organization.slug(),
            "organization created"
        );
        Ok(organization)
    }

    /// Returns every organization ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationServiceError::Repository`] when the lookup
    /// fails.
    pub async fn list_all(&self) -> OrganizationServiceResult<Vec<Organization>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds an organization by a caller-supplied slug.
    ///
    /// Returns `Ok(None)` for unknown slugs, including values that are not
    /// in canonical slug form and therefore cannot match any organization.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationServiceError::Repository`] when the lookup
    /// fails.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> OrganizationServiceResult<Option<Organization>> {
        let Ok(parsed) = OrganizationSlug::parse(slug) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_slug(&parsed).await?)
    }

    /// Retrieves an organization by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationServiceError::NotFound`] when the organization
    /// does not exist.
    pub async fn find(&self, id: OrganizationId) -> OrganizationServiceResult<Organization> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrganizationServiceError::NotFound)
    }
}
