//! Repository port for task comments.

use super::TaskRepositoryResult;
use crate::task::domain::{TaskComment, TaskId};
use async_trait::async_trait;

/// Comment persistence contract. Comments are append-only.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::DuplicateComment`] when the
    /// identifier already exists.
    async fn store(&self, comment: &TaskComment) -> TaskRepositoryResult<()>;

    /// Returns the comments of a task ordered by creation time.
    async fn list_by_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskComment>>;
}
