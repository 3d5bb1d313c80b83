//! GraphQL object types wrapping the domain aggregates.

use super::error::bad_input;
use super::scalars::Date;
use crate::app::AppServices;
use crate::organization::domain::{Organization, OrganizationId};
use crate::project::domain::{Project, ProjectId, ProjectStatus};
use crate::task::domain::{Task, TaskComment, TaskId, TaskStatus};
use async_graphql::{ComplexObject, Context, Enum, ID, Result, ResultExt, SimpleObject};
use chrono::{DateTime, Utc};

pub(crate) fn services<'ctx>(ctx: &Context<'ctx>) -> Result<&'ctx AppServices> {
    ctx.data::<AppServices>()
}

/// Project status as exposed to clients.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "ProjectStatus")]
pub enum ProjectStatusValue {
    /// Work is ongoing.
    Active,
    /// Work has finished.
    Completed,
    /// Work is paused.
    OnHold,
}

impl From<ProjectStatus> for ProjectStatusValue {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => Self::Active,
            ProjectStatus::Completed => Self::Completed,
            ProjectStatus::OnHold => Self::OnHold,
        }
    }
}

/// Task status as exposed to clients.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "TaskStatus")]
pub enum TaskStatusValue {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl From<TaskStatus> for TaskStatusValue {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Self::Todo,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Done => Self::Done,
        }
    }
}

/// Parses a client-supplied project status, ignoring case.
pub(crate) fn parse_project_status(raw: &str) -> Result<ProjectStatus> {
    ProjectStatus::try_from(raw).map_err(bad_input)
}

/// An organization (tenant).
#[derive(SimpleObject)]
#[graphql(name = "Organization", complex)]
pub struct OrganizationObject {
    id: ID,
    name: String,
    slug: String,
    contact_email: Option<String>,
    created_at: DateTime<Utc>,
    #[graphql(skip)]
    organization_id: OrganizationId,
}

impl From<Organization> for OrganizationObject {
    fn from(organization: Organization) -> Self {
        Self {
            id: ID::from(organization.id()),
            name: organization.name().as_str().to_owned(),
            slug: organization.slug().as_str().to_owned(),
            contact_email: organization
                .contact_email()
                .map(|email| email.as_str().to_owned()),
            created_at: organization.created_at(),
            organization_id: organization.id(),
        }
    }
}

#[ComplexObject]
impl OrganizationObject {
    /// Projects owned by the organization, oldest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject>> {
        let projects = services(ctx)?
            .projects
            .list_by_organization_id(self.organization_id)
            .await
            .extend()?;
        Ok(projects.into_iter().map(ProjectObject::from).collect())
    }
}

/// A project inside an organization.
#[derive(SimpleObject)]
#[graphql(name = "Project", complex)]
pub struct ProjectObject {
    id: ID,
    name: String,
    description: String,
    status: ProjectStatusValue,
    due_date: Option<Date>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[graphql(skip)]
    project_id: ProjectId,
    #[graphql(skip)]
    organization_id: OrganizationId,
}

impl From<Project> for ProjectObject {
    fn from(project: Project) -> Self {
        Self {
            id: ID::from(project.id()),
            name: project.name().as_str().to_owned(),
            description: project.description().to_owned(),
            status: project.status().into(),
            due_date: project.due_date().map(Date),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
            project_id: project.id(),
            organization_id: project.organization_id(),
        }
    }
}

#[ComplexObject]
impl ProjectObject {
    async fn organization(&self, ctx: &Context<'_>) -> Result<OrganizationObject> {
        let organization = services(ctx)?
            .organizations
            .find(self.organization_id)
            .await
            .extend()?;
        Ok(organization.into())
    }

    /// Tasks of the project, oldest first.
    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<TaskObject>> {
        let tasks = services(ctx)?
            .tasks
            .list_for_project(self.project_id)
            .await
            .extend()?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// Number of tasks in the project.
    async fn task_count(&self, ctx: &Context<'_>) -> Result<u64> {
        services(ctx)?
            .tasks
            .count_tasks(self.project_id)
            .await
            .extend()
    }

    /// Number of tasks in the project whose status is `DONE`.
    async fn completed_task_count(&self, ctx: &Context<'_>) -> Result<u64> {
        services(ctx)?
            .tasks
            .count_completed(self.project_id)
            .await
            .extend()
    }
}

/// A task inside a project.
#[derive(SimpleObject)]
#[graphql(name = "Task", complex)]
pub struct TaskObject {
    id: ID,
    title: String,
    description: String,
    status: TaskStatusValue,
    assignee_email: Option<String>,
    due_date: Option<Date>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[graphql(skip)]
    task_id: TaskId,
    #[graphql(skip)]
    project_id: ProjectId,
}

impl From<Task> for TaskObject {
    fn from(task: Task) -> Self {
        Self {
            id: ID::from(task.id()),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status().into(),
            assignee_email: task.assignee_email().map(|email| email.as_str().to_owned()),
            due_date: task.due_date().map(Date),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            task_id: task.id(),
            project_id: task.project_id(),
        }
    }
}

#[ComplexObject]
impl TaskObject {
    async fn project(&self, ctx: &Context<'_>) -> Result<ProjectObject> {
        let project = services(ctx)?
            .projects
            .find(self.project_id)
            .await
            .extend()?;
        Ok(project.into())
    }

    /// Comments on the task, oldest first.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentObject>> {
        let comments = services(ctx)?
            .tasks
            .list_comments(self.task_id)
            .await
            .extend()?;
        Ok(comments.into_iter().map(CommentObject::from).collect())
    }
}

/// A comment on a task.
#[derive(SimpleObject)]
#[graphql(name = "TaskComment", complex)]
pub struct CommentObject {
    id: ID,
    content: String,
    author_email: String,
    created_at: DateTime<Utc>,
    #[graphql(skip)]
    task_id: TaskId,
}

impl From<TaskComment> for CommentObject {
    fn from(comment: TaskComment) -> Self {
        Self {
            id: ID::from(comment.id()),
            content: comment.content().as_str().to_owned(),
            author_email: comment.author_email().as_str().to_owned(),
            created_at: comment.created_at(),
            task_id: comment.task_id(),
        }
    }
}

#[ComplexObject]
impl CommentObject {
    async fn task(&self, ctx: &Context<'_>) -> Result<TaskObject> {
        let task = services(ctx)?
            .tasks
            .find(self.task_id)
            .await
            .extend()?;
        Ok(task.into())
    }
}

/// Result of an organization mutation.
#[derive(SimpleObject)]
pub struct OrganizationPayload {
    /// The affected organization.
    pub organization: OrganizationObject,
}

/// Result of a project mutation.
#[derive(SimpleObject)]
pub struct ProjectPayload {
    /// The affected project.
    pub project: ProjectObject,
}

/// Result of a task mutation.
#[derive(SimpleObject)]
pub struct TaskPayload {
    /// The affected task.
    pub task: TaskObject,
}

/// Result of a comment mutation.
#[derive(SimpleObject)]
pub struct CommentPayload {
    /// The new comment.
    pub comment: CommentObject,
}
