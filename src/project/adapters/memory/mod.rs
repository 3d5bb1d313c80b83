//! In-memory adapters for project ports.

mod repository;

pub use repository::InMemoryProjectRepository;
