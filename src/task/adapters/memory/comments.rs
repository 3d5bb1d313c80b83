//! In-memory repository for task comments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::repository::lock_error;
use crate::task::{
    domain::{CommentId, TaskComment, TaskId},
    ports::{CommentRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    state: Arc<RwLock<InMemoryCommentState>>,
}

#[derive(Debug, Default)]
struct InMemoryCommentState {
    comments: HashMap<CommentId, TaskComment>,
    task_index: HashMap<TaskId, Vec<CommentId>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn store(&self, comment: &TaskComment) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.comments.contains_key(&comment.id()) {
            return Err(TaskRepositoryError::DuplicateComment(comment.id()));
        }

        state
            .task_index
            .entry(comment.task_id())
            .or_default()
            .push(comment.id());
        state.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn list_by_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskComment>> {
        let state = self.state.read().map_err(lock_error)?;
        let comments = state
            .task_index
            .get(&task_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.comments.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(comments)
    }
}
