//! In-memory adapters for organization ports.

mod repository;

pub use repository::InMemoryOrganizationRepository;
