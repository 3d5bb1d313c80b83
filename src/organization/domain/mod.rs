//! Domain model for organizations.

mod error;
mod ids;
mod organization;
mod slug;

pub use error::OrganizationDomainError;
pub use ids::{OrganizationId, OrganizationName};
pub use organization::{Organization, PersistedOrganizationData};
pub use slug::OrganizationSlug;
