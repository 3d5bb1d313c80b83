//! In-memory repository for organizations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::organization::{
    domain::{Organization, OrganizationId, OrganizationSlug},
    ports::{OrganizationRepository, OrganizationRepositoryError, OrganizationRepositoryResult},
};

/// Thread-safe in-memory organization repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrganizationRepository {
    state: Arc<RwLock<InMemoryOrganizationState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrganizationState {
    organizations: HashMap<OrganizationId, Organization>,
    slug_index: HashMap<OrganizationSlug, OrganizationId>,
    insertion_order: Vec<OrganizationId>,
}

impl InMemoryOrganizationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> OrganizationRepositoryError {
    OrganizationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn store(&self, organization: &Organization) -> OrganizationRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.organizations.contains_key(&organization.id()) {
            return Err(OrganizationRepositoryError::DuplicateOrganization(
                organization.id(),
            ));
        }
        let slug = organization.slug().clone();
        if state.slug_index.contains_key(&slug) {
            return Err(OrganizationRepositoryError::DuplicateSlug(slug));
        }

        state.slug_index.insert(slug, organization.id());
        state.insertion_order.push(organization.id());
        state
            .organizations
            .insert(organization.id(), organization.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: OrganizationId,
    ) -> OrganizationRepositoryResult<Option<Organization>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.organizations.get(&id).cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &OrganizationSlug,
    ) -> OrganizationRepositoryResult<Option<Organization>> {
        let state = self.state.read().map_err(lock_error)?;
        let organization = state
            .slug_index
            .get(slug)
            .and_then(|id| state.organizations.get(id))
            .cloned();
        Ok(organization)
    }

    async fn list_all(&self) -> OrganizationRepositoryResult<Vec<Organization>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.organizations.get(id).cloned())
            .collect())
    }
}
