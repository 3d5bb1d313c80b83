//! Service layer for task creation, status changes, comments and progress.

use crate::email::EmailAddress;
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        CommentContent, NewTask, Task, TaskChanges, TaskComment, TaskDomainError, TaskId,
        TaskProgress, TaskStatus, TaskTitle,
    },
    ports::{CommentRepository, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee_email: Option<String>,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required project and title.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            assignee_email: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee address.
    #[must_use]
    pub fn with_assignee_email(mut self, email: impl Into<String>) -> Self {
        self.assignee_email = Some(email.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    assignee_email: Option<Option<String>>,
    due_date: Option<Option<NaiveDate>>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the assignee; `None` or a blank address unassigns the task.
    #[must_use]
    pub fn with_assignee_email(mut self, email: Option<String>) -> Self {
        self.assignee_email = Some(email);
        self
    }

    /// Replaces the due date; `None` clears it.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for commenting on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentRequest {
    task_id: TaskId,
    content: String,
    author_email: String,
}

impl NewCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        content: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            content: content.into(),
            author_email: author_email.into(),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The owning project does not exist.
    #[error("Project not found")]
    ProjectNotFound(ProjectId),

    /// The task does not exist.
    #[error("Task not found")]
    NotFound(TaskId),

    /// Task or comment repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),

    /// Project lookup failed.
    #[error(transparent)]
    Project(#[from] ProjectRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<T, K, P, C>
where
    T: TaskRepository + ?Sized,
    K: CommentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    comments: Arc<K>,
    projects: Arc<P>,
    clock: Arc<C>,
}

impl<T, K, P, C> Clone for TaskService<T, K, P, C>
where
    T: TaskRepository + ?Sized,
    K: CommentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            comments: Arc::clone(&self.comments),
            projects: Arc::clone(&self.projects),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, K, P, C> TaskService<T, K, P, C>
where
    T: TaskRepository + ?Sized,
    K: CommentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, comments: Arc<K>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            comments,
            projects,
            clock,
        }
    }

    /// Creates a task in the `Todo` state inside an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project does
    /// not exist; nothing is persisted in that case.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            project_id,
            title,
            description,
            assignee_email,
            due_date,
        } = request;
        let validated_title = TaskTitle::new(title)?;
        let assignee = parse_assignee(assignee_email)?;
        if self.projects.find_by_id(project_id).await?.is_none() {
            return Err(TaskServiceError::ProjectNotFound(project_id));
        }

        let task = Task::new(
            NewTask {
                project_id,
                title: validated_title,
                description: description.unwrap_or_default(),
                assignee_email: assignee,
                due_date,
            },
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        tracing::info!(task_id = %task.id(), project_id = %project_id, "task created");
        Ok(task)
    }

    /// Overwrites a task's status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let mut task = self.find(id).await?;
        task.set_status(status, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, status = status.as_str(), "task status updated");
        Ok(task)
    }

    /// Applies a partial update to a task's descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or [`TaskServiceError::Domain`] for an invalid title or address.
    pub async fn update_details(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let changes = TaskChanges {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description,
            assignee_email: request.assignee_email.map(parse_assignee).transpose()?,
            due_date: request.due_date,
        };
        let mut task = self.find(id).await?;
        task.apply(changes, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Appends a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or [`TaskServiceError::Domain`] for blank content or a malformed
    /// author address.
    pub async fn add_comment(&self, request: NewCommentRequest) -> TaskServiceResult<TaskComment> {
        let NewCommentRequest {
            task_id,
            content,
            author_email,
        } = request;
        let body = CommentContent::new(content)?;
        let author = EmailAddress::new(author_email).map_err(TaskDomainError::from)?;
        self.find(task_id).await?;

        let comment = TaskComment::new(task_id, body, author, &*self.clock);
        self.comments.store(&comment).await?;
        tracing::info!(comment_id = %comment.id(), task_id = %task_id, "comment added");
        Ok(comment)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn find(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Lists the tasks of a project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_for_project(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_by_project(project_id).await?)
    }

    /// Lists the comments of a task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_comments(&self, task_id: TaskId) -> TaskServiceResult<Vec<TaskComment>> {
        Ok(self.comments.list_by_task(task_id).await?)
    }

    /// Counts every task of a project with a single count query.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the count query fails.
    pub async fn count_tasks(&self, project_id: ProjectId) -> TaskServiceResult<u64> {
        Ok(self.tasks.count_by_project(project_id, None).await?)
    }

    /// Counts the `DONE` tasks of a project with a single count query.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the count query fails.
    pub async fn count_completed(&self, project_id: ProjectId) -> TaskServiceResult<u64> {
        Ok(self
            .tasks
            .count_by_project(project_id, Some(TaskStatus::Done))
            .await?)
    }

    /// Counts all and completed tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when a count query fails.
    pub async fn progress(&self, project_id: ProjectId) -> TaskServiceResult<TaskProgress> {
        let total = self.count_tasks(project_id).await?;
        let completed = self.count_completed(project_id).await?;
        Ok(TaskProgress { total, completed })
    }
}

/// Parses an optional assignee address, treating blank input as no assignee.
fn parse_assignee(raw: Option<String>) -> Result<Option<EmailAddress>, TaskDomainError> {
    raw.filter(|value| !value.trim().is_empty())
        .map(EmailAddress::new)
        .transpose()
        .map_err(TaskDomainError::from)
}
