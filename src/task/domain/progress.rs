//! Aggregate task counts for a project.

use serde::{Deserialize, Serialize};

/// Task totals computed for one project at read time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Number of tasks in the project.
    pub total: u64,
    /// Number of tasks whose status is [`super::TaskStatus::Done`].
    pub completed: u64,
}
