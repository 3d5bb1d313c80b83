//! Adapter implementations for organization ports.
//!
//! - [`memory::InMemoryOrganizationRepository`]: thread-safe in-memory
//!   storage for tests and database-less runs
//! - [`postgres::PostgresOrganizationRepository`]: `PostgreSQL` persistence
//!   using Diesel

pub mod memory;
pub mod postgres;
