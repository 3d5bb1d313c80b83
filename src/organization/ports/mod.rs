//! Port contracts for organization management.

pub mod repository;

pub use repository::{
    OrganizationRepository, OrganizationRepositoryError, OrganizationRepositoryResult,
};
