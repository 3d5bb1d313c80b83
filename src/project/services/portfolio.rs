//! Service layer for project creation, tenant-scoped listing and editing.

use crate::organization::{
    domain::{OrganizationId, OrganizationSlug},
    ports::{OrganizationRepository, OrganizationRepositoryError},
};
use crate::project::{
    domain::{
        NewProject, Project, ProjectChanges, ProjectDomainError, ProjectId, ProjectName,
        ProjectStatus,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project inside an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    organization_slug: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl CreateProjectRequest {
    /// Creates a request with the required name and owning organization slug.
    #[must_use]
    pub fn new(name: impl Into<String>, organization_slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization_slug: organization_slug.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial project update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    name: Option<String>,
    description: Option<String>,
    due_date: Option<Option<NaiveDate>>,
    status: Option<ProjectStatus>,
}

impl UpdateProjectRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date; `None` clears it.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// The addressed organization does not exist.
    #[error("Organization not found")]
    OrganizationNotFound,

    /// The project does not exist.
    #[error("Project not found")]
    NotFound(ProjectId),

    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// Organization lookup failed.
    #[error(transparent)]
    Organization(#[from] OrganizationRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
pub struct ProjectService<P, O, C>
where
    P: ProjectRepository + ?Sized,
    O: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    organizations: Arc<O>,
    clock: Arc<C>,
}

impl<P, O, C> Clone for ProjectService<P, O, C>
where
    P: ProjectRepository + ?Sized,
    O: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            organizations: Arc::clone(&self.organizations),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, O, C> ProjectService<P, O, C>
where
    P: ProjectRepository + ?Sized,
    O: OrganizationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, organizations: Arc<O>, clock: Arc<C>) -> Self {
        Self {
            projects,
            organizations,
            clock,
        }
    }

    /// Creates a project owned by the organization with the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::OrganizationNotFound`] when no
    /// organization owns the slug; nothing is persisted in that case.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectServiceResult<Project> {
        let name = ProjectName::new(request.name)?;
        let organization_id = self
            .resolve_organization(&request.organization_slug)
            .await?
            .ok_or(ProjectServiceError::OrganizationNotFound)?;

        let project = Project::new(
            NewProject {
                organization_id,
                name,
                description: request.description.unwrap_or_default(),
                due_date: request.due_date,
            },
            &*self.clock,
        );
        self.projects.store(&project).await?;
        tracing::info!(
            project_id = %project.id(),
            organization_id = %organization_id,
            "project created"
        );
        Ok(project)
    }

    /// Lists the projects of the organization with the given slug.
    ///
    /// An unknown slug yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when a repository lookup fails.
    pub async fn list_for_organization(&self, slug: &str) -> ProjectServiceResult<Vec<Project>> {
        let Some(organization_id) = self.resolve_organization(slug).await? else {
            return Ok(Vec::new());
        };
        self.list_by_organization_id(organization_id).await
    }

    /// Lists the projects owned by an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn list_by_organization_id(
        &self,
        organization_id: OrganizationId,
    ) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.projects.list_by_organization(organization_id).await?)
    }

    /// Retrieves a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn find(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    /// Applies a partial update to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist or [`ProjectServiceError::Domain`] when a new name is invalid.
    pub async fn update(
        &self,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let changes = ProjectChanges {
            name: request.name.map(ProjectName::new).transpose()?,
            description: request.description,
            due_date: request.due_date,
            status: request.status,
        };
        let mut project = self.find(id).await?;
        project.apply(changes, &*self.clock);
        self.projects.update(&project).await.map_err(|err| match err {
            ProjectRepositoryError::NotFound(missing) => ProjectServiceError::NotFound(missing),
            other => ProjectServiceError::Repository(other),
        })?;
        tracing::info!(project_id = %id, "project updated");
        Ok(project)
    }

    async fn resolve_organization(
        &self,
        slug: &str,
    ) -> ProjectServiceResult<Option<OrganizationId>> {
        let Ok(parsed) = OrganizationSlug::parse(slug) else {
            return Ok(None);
        };
        let organization = self.organizations.find_by_slug(&parsed).await?;
        Ok(organization.map(|found| found.id()))
    }
}
