//! Wiring of repositories and services shared by every request.

use crate::organization::{
    adapters::{memory::InMemoryOrganizationRepository, postgres::PostgresOrganizationRepository},
    ports::OrganizationRepository,
    services::OrganizationService,
};
use crate::persistence::PgPool;
use crate::project::{
    adapters::{memory::InMemoryProjectRepository, postgres::PostgresProjectRepository},
    ports::ProjectRepository,
    services::ProjectService,
};
use crate::task::{
    adapters::{
        memory::{InMemoryCommentRepository, InMemoryTaskRepository},
        postgres::{PostgresCommentRepository, PostgresTaskRepository},
    },
    ports::{CommentRepository, TaskRepository},
    services::TaskService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Organization service over a type-erased repository.
pub type AppOrganizationService = OrganizationService<dyn OrganizationRepository, DefaultClock>;

/// Project service over type-erased repositories.
pub type AppProjectService =
    ProjectService<dyn ProjectRepository, dyn OrganizationRepository, DefaultClock>;

/// Task service over type-erased repositories.
pub type AppTaskService = TaskService<
    dyn TaskRepository,
    dyn CommentRepository,
    dyn ProjectRepository,
    DefaultClock,
>;

/// The set of repository adapters backing one running server.
#[derive(Clone)]
pub struct Repositories {
    /// Organization storage.
    pub organizations: Arc<dyn OrganizationRepository>,
    /// Project storage.
    pub projects: Arc<dyn ProjectRepository>,
    /// Task storage.
    pub tasks: Arc<dyn TaskRepository>,
    /// Comment storage.
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    /// Builds process-local repositories that forget everything on exit.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            organizations: Arc::new(InMemoryOrganizationRepository::new()),
            projects: Arc::new(InMemoryProjectRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }

    /// Builds `PostgreSQL` repositories sharing one connection pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            organizations: Arc::new(PostgresOrganizationRepository::new(pool.clone())),
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
            comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        }
    }
}

/// Application services handed to the GraphQL schema.
#[derive(Clone)]
pub struct AppServices {
    /// Organization operations.
    pub organizations: AppOrganizationService,
    /// Project operations.
    pub projects: AppProjectService,
    /// Task and comment operations.
    pub tasks: AppTaskService,
}

impl AppServices {
    /// Builds the services over the given repositories with the system clock.
    #[must_use]
    pub fn new(repositories: Repositories) -> Self {
        let Repositories {
            organizations,
            projects,
            tasks,
            comments,
        } = repositories;
        let clock = Arc::new(DefaultClock);
        Self {
            organizations: OrganizationService::new(Arc::clone(&organizations), Arc::clone(&clock)),
            projects: ProjectService::new(Arc::clone(&projects), organizations, Arc::clone(&clock)),
            tasks: TaskService::new(tasks, comments, projects, clock),
        }
    }

    /// Builds services over fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
