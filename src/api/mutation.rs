//! Mutation root.

use super::error::parse_id;
use super::objects::{
    CommentObject, CommentPayload, OrganizationObject, OrganizationPayload, ProjectObject,
    ProjectPayload, TaskObject, TaskPayload, parse_project_status, services,
};
use super::scalars::Date;
use crate::organization::services::CreateOrganizationRequest;
use crate::project::{
    domain::ProjectId,
    services::{CreateProjectRequest, UpdateProjectRequest},
};
use crate::task::{
    domain::{TaskDomainError, TaskId, TaskStatus},
    services::{CreateTaskRequest, NewCommentRequest, TaskServiceError, UpdateTaskRequest},
};
use async_graphql::{Context, ID, MaybeUndefined, Object, Result, ResultExt};

/// Maps an optional, nullable argument to "unchanged" (`None`), "clear"
/// (`Some(None)`) or "set" (`Some(Some(_))`).
fn clearable<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(inner) => Some(Some(inner)),
    }
}

/// State-changing entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates an organization whose slug is derived from `name`.
    async fn create_organization(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: Option<String>,
    ) -> Result<OrganizationPayload> {
        let mut request = CreateOrganizationRequest::new(name);
        if let Some(address) = email {
            request = request.with_contact_email(address);
        }
        let organization = services(ctx)?
            .organizations
            .create(request)
            .await
            .extend()?;
        Ok(OrganizationPayload {
            organization: OrganizationObject::from(organization),
        })
    }

    /// Creates a project in the organization owning `organizationSlug`.
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        organization_slug: String,
        description: Option<String>,
        due_date: Option<Date>,
    ) -> Result<ProjectPayload> {
        let mut request = CreateProjectRequest::new(name, organization_slug);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(Date(date)) = due_date {
            request = request.with_due_date(date);
        }
        let project = services(ctx)?.projects.create(request).await.extend()?;
        Ok(ProjectPayload {
            project: ProjectObject::from(project),
        })
    }

    /// Changes the supplied fields of a project; `dueDate: null` clears it.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        due_date: MaybeUndefined<Date>,
        status: Option<String>,
    ) -> Result<ProjectPayload> {
        let project_id = ProjectId::from_uuid(parse_id(&id)?);
        let mut request = UpdateProjectRequest::new();
        if let Some(raw) = status {
            request = request.with_status(parse_project_status(&raw)?);
        }
        if let Some(text) = name {
            request = request.with_name(text);
        }
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(date) = clearable(due_date) {
            request = request.with_due_date(date.map(|Date(inner)| inner));
        }
        let project = services(ctx)?
            .projects
            .update(project_id, request)
            .await
            .extend()?;
        Ok(ProjectPayload {
            project: ProjectObject::from(project),
        })
    }

    /// Creates a task in the `TODO` state.
    async fn create_task(
        &self,
        ctx: &Context<'_>,
        project_id: ID,
        title: String,
        description: Option<String>,
        assignee_email: Option<String>,
        due_date: Option<Date>,
    ) -> Result<TaskPayload> {
        let owner = ProjectId::from_uuid(parse_id(&project_id)?);
        let mut request = CreateTaskRequest::new(owner, title);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(address) = assignee_email {
            request = request.with_assignee_email(address);
        }
        if let Some(Date(date)) = due_date {
            request = request.with_due_date(date);
        }
        let task = services(ctx)?.tasks.create(request).await.extend()?;
        Ok(TaskPayload {
            task: TaskObject::from(task),
        })
    }

    /// Sets a task's status. Accepts `TODO`, `IN_PROGRESS` or `DONE` in any
    /// letter case.
    async fn update_task_status(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        status: String,
    ) -> Result<TaskPayload> {
        let new_status = TaskStatus::try_from(status.as_str())
            .map_err(|err| TaskServiceError::Domain(TaskDomainError::from(err)))
            .extend()?;
        let id = TaskId::from_uuid(parse_id(&task_id)?);
        let task = services(ctx)?
            .tasks
            .update_status(id, new_status)
            .await
            .extend()?;
        Ok(TaskPayload {
            task: TaskObject::from(task),
        })
    }

    /// Changes the supplied fields of a task; `assigneeEmail: null` and
    /// `dueDate: null` clear those fields.
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        description: Option<String>,
        assignee_email: MaybeUndefined<String>,
        due_date: MaybeUndefined<Date>,
    ) -> Result<TaskPayload> {
        let task_id = TaskId::from_uuid(parse_id(&id)?);
        let mut request = UpdateTaskRequest::new();
        if let Some(text) = title {
            request = request.with_title(text);
        }
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(address) = clearable(assignee_email) {
            request = request.with_assignee_email(address);
        }
        if let Some(date) = clearable(due_date) {
            request = request.with_due_date(date.map(|Date(inner)| inner));
        }
        let task = services(ctx)?
            .tasks
            .update_details(task_id, request)
            .await
            .extend()?;
        Ok(TaskPayload {
            task: TaskObject::from(task),
        })
    }

    /// Appends a comment to a task.
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        content: String,
        author_email: String,
    ) -> Result<CommentPayload> {
        let id = TaskId::from_uuid(parse_id(&task_id)?);
        let comment = services(ctx)?
            .tasks
            .add_comment(NewCommentRequest::new(id, content, author_email))
            .await
            .extend()?;
        Ok(CommentPayload {
            comment: CommentObject::from(comment),
        })
    }
}
