//! In-memory adapters for task ports.

mod comments;
mod repository;

pub use comments::InMemoryCommentRepository;
pub use repository::InMemoryTaskRepository;
