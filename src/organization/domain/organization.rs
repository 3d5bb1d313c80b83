//! Organization aggregate root.

use super::{OrganizationDomainError, OrganizationId, OrganizationName, OrganizationSlug};
use crate::email::EmailAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Organization aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    name: OrganizationName,
    slug: OrganizationSlug,
    contact_email: Option<EmailAddress>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrganizationData {
    /// Persisted identifier.
    pub id: OrganizationId,
    /// Persisted display name.
    pub name: OrganizationName,
    /// Persisted slug.
    pub slug: OrganizationSlug,
    /// Persisted contact address, if any.
    pub contact_email: Option<EmailAddress>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new organization, deriving its slug from the name.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::UnsluggableName`] when the name
    /// yields an empty slug.
    pub fn new(
        name: OrganizationName,
        contact_email: Option<EmailAddress>,
        clock: &impl Clock,
    ) -> Result<Self, OrganizationDomainError> {
        let slug = OrganizationSlug::from_name(&name)?;
        Ok(Self {
            id: OrganizationId::new(),
            name,
            slug,
            contact_email,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs an organization from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOrganizationData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            slug: data.slug,
            contact_email: data.contact_email,
            created_at: data.created_at,
        }
    }

    /// Returns the organization identifier.
    #[must_use]
    pub const fn id(&self) -> OrganizationId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &OrganizationName {
        &self.name
    }

    /// Returns the unique slug.
    #[must_use]
    pub const fn slug(&self) -> &OrganizationSlug {
        &self.slug
    }

    /// Returns the contact address, if any.
    #[must_use]
    pub const fn contact_email(&self) -> Option<&EmailAddress> {
        self.contact_email.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
