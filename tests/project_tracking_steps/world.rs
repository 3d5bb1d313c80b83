//! Shared world state for project tracking BDD scenarios.

use rstest::fixture;
use workboard::{
    app::AppServices,
    organization::{domain::Organization, services::OrganizationServiceError},
    project::{
        domain::Project,
        services::ProjectServiceError,
    },
    task::domain::Task,
};

/// Scenario world for project tracking behaviour tests.
pub struct TrackingWorld {
    pub services: AppServices,
    pub first_organization: Option<Organization>,
    pub project: Option<Project>,
    pub tasks: Vec<Task>,
    pub last_organization_result: Option<Result<Organization, OrganizationServiceError>>,
    pub last_project_result: Option<Result<Project, ProjectServiceError>>,
}

impl TrackingWorld {
    /// Creates a world over empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: AppServices::in_memory(),
            first_organization: None,
            project: None,
            tasks: Vec::new(),
            last_organization_result: None,
            last_project_result: None,
        }
    }

    /// Returns the project created by an earlier step.
    ///
    /// # Errors
    ///
    /// Returns an error when no project step has run.
    pub fn current_project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

impl Default for TrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackingWorld {
    TrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
