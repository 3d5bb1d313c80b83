//! `PostgreSQL` adapters for task and comment persistence.

mod comments;
mod models;
mod repository;
mod schema;

pub use comments::PostgresCommentRepository;
pub use repository::PostgresTaskRepository;
