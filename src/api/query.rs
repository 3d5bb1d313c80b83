//! Query root.

use super::error::parse_id;
use super::objects::{OrganizationObject, ProjectObject, services};
use crate::project::domain::ProjectId;
use async_graphql::{Context, ID, Object, Result, ResultExt};

/// Read-only entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every organization, oldest first.
    async fn all_organizations(&self, ctx: &Context<'_>) -> Result<Vec<OrganizationObject>> {
        let organizations = services(ctx)?.organizations.list_all().await.extend()?;
        Ok(organizations.into_iter().map(OrganizationObject::from).collect())
    }

    /// The organization owning `slug`, or null.
    async fn organization(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<OrganizationObject>> {
        let organization = services(ctx)?
            .organizations
            .find_by_slug(&slug)
            .await
            .extend()?;
        Ok(organization.map(OrganizationObject::from))
    }

    /// Projects of the organization owning `orgSlug`; empty for an unknown
    /// slug.
    async fn organization_projects(
        &self,
        ctx: &Context<'_>,
        org_slug: String,
    ) -> Result<Vec<ProjectObject>> {
        let projects = services(ctx)?
            .projects
            .list_for_organization(&org_slug)
            .await
            .extend()?;
        Ok(projects.into_iter().map(ProjectObject::from).collect())
    }

    /// A single project.
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<ProjectObject> {
        let project_id = ProjectId::from_uuid(parse_id(&id)?);
        let project = services(ctx)?.projects.find(project_id).await.extend()?;
        Ok(ProjectObject::from(project))
    }
}
