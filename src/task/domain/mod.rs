//! Domain model for tasks and task comments.
//!
//! Infrastructure concerns stay outside this boundary; adapters rebuild
//! aggregates through the `Persisted*Data` parameter objects.

mod comment;
mod error;
mod ids;
mod progress;
mod status;
mod task;

pub use comment::{PersistedCommentData, TaskComment};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{CommentContent, CommentId, TaskId, TaskTitle};
pub use progress::TaskProgress;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
