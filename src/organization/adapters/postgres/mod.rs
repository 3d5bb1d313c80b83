//! `PostgreSQL` adapters for organization persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresOrganizationRepository;
