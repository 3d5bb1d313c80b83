//! Free-text comments attached to tasks.

use super::{CommentContent, CommentId, TaskId};
use crate::email::EmailAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Comment attached to a task. Comments are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    id: CommentId,
    task_id: TaskId,
    content: CommentContent,
    author_email: EmailAddress,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted identifier.
    pub id: CommentId,
    /// Persisted owning task.
    pub task_id: TaskId,
    /// Persisted body.
    pub content: CommentContent,
    /// Persisted author.
    pub author_email: EmailAddress,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskComment {
    /// Writes a new comment on a task.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        content: CommentContent,
        author_email: EmailAddress,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: CommentId::new(),
            task_id,
            content,
            author_email,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            content: data.content,
            author_email: data.author_email,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment body.
    #[must_use]
    pub const fn content(&self) -> &CommentContent {
        &self.content
    }

    /// Returns the author address.
    #[must_use]
    pub const fn author_email(&self) -> &EmailAddress {
        &self.author_email
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
