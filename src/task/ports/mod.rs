//! Port contracts for task tracking.

pub mod comments;
pub mod repository;

pub use comments::CommentRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
