//! Project aggregate root.

use super::{ProjectId, ProjectName, ProjectStatus};
use crate::organization::domain::OrganizationId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    organization_id: OrganizationId,
    name: ProjectName,
    description: String,
    status: ProjectStatus,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Project name.
    pub name: ProjectName,
    /// Free-text description; empty when not supplied.
    pub description: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Validated partial update for an existing project.
///
/// `None` leaves a field unchanged. For `due_date`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    /// Replacement name.
    pub name: Option<ProjectName>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<NaiveDate>>,
    /// Replacement status.
    pub status: Option<ProjectStatus>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Persisted owning organization.
    pub organization_id: OrganizationId,
    /// Persisted name.
    pub name: ProjectName,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: ProjectStatus,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project.
    #[must_use]
    pub fn new(input: NewProject, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            organization_id: input.organization_id,
            name: input.name,
            description: input.description,
            status: ProjectStatus::Active,
            due_date: input.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            organization_id: data.organization_id,
            name: data.name,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update and touches `updated_at`.
    pub fn apply(&mut self, changes: ProjectChanges, clock: &impl Clock) {
        let ProjectChanges {
            name,
            description,
            due_date,
            status,
        } = changes;
        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        self.updated_at = clock.utc();
    }
}
