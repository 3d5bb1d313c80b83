//! Application services for organization management.

mod directory;

pub use directory::{
    CreateOrganizationRequest, OrganizationService, OrganizationServiceError,
    OrganizationServiceResult,
};
