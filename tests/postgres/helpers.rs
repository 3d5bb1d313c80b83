//! Per-test databases and domain builders for the `PostgreSQL` suite.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::fixture;
use tokio::runtime::Runtime;
use uuid::Uuid;
use workboard::{
    app::{AppServices, Repositories},
    organization::domain::{
        Organization, OrganizationId, OrganizationName, OrganizationSlug,
        PersistedOrganizationData,
    },
    persistence::{PgPool, apply_migrations, build_pool},
    project::domain::{PersistedProjectData, Project, ProjectId, ProjectName, ProjectStatus},
    task::domain::{PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
};

/// Freshly migrated database that is dropped with the value.
pub struct TestDatabase {
    /// Pool connected to the database.
    pub pool: PgPool,
    runtime: Runtime,
    cluster: PostgresCluster,
    name: String,
}

impl TestDatabase {
    fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        let name = format!("workboard_test_{}", Uuid::new_v4().simple());
        cluster.create_database(&name)?;
        let url = cluster.database_url(&name);
        apply_migrations(&url)?;
        let pool = build_pool(&url, 2)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            pool,
            runtime,
            cluster,
            name,
        })
    }

    /// Drives a future to completion on the test runtime.
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Application services wired to the Diesel adapters of this database.
    #[must_use]
    pub fn services(&self) -> AppServices {
        AppServices::new(Repositories::postgres(&self.pool))
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// Provides a migrated database, or `None` when no server is available.
///
/// # Errors
///
/// Returns an error when the server is reachable but the database cannot be
/// created or migrated.
#[fixture]
pub fn database(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<TestDatabase>, BoxError> {
    postgres_cluster.map(TestDatabase::create).transpose()
}

/// A fixed timestamp `offset_secs` seconds after a shared base instant.
///
/// `PostgreSQL` stores microseconds, so whole seconds round-trip exactly.
pub fn at(offset_secs: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2026, 10, 1, 9, 0, 0)
        .single()
        .unwrap_or_default();
    base + Duration::seconds(offset_secs)
}

/// Builds an organization with a fixed creation time.
pub fn organization(name: &str, created_at: DateTime<Utc>) -> Result<Organization, BoxError> {
    let organization_name = OrganizationName::new(name)?;
    let slug = OrganizationSlug::from_name(&organization_name)?;
    Ok(Organization::from_persisted(PersistedOrganizationData {
        id: OrganizationId::new(),
        name: organization_name,
        slug,
        contact_email: None,
        created_at,
    }))
}

/// Builds an active project with fixed timestamps.
pub fn project(
    organization_id: OrganizationId,
    name: &str,
    created_at: DateTime<Utc>,
) -> Result<Project, BoxError> {
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(),
        organization_id,
        name: ProjectName::new(name)?,
        description: String::new(),
        status: ProjectStatus::Active,
        due_date: None,
        created_at,
        updated_at: created_at,
    }))
}

/// Builds a task in `status` with fixed timestamps.
pub fn task(
    project_id: ProjectId,
    title: &str,
    status: TaskStatus,
    created_at: DateTime<Utc>,
) -> Result<Task, BoxError> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: TaskTitle::new(title)?,
        description: String::new(),
        status,
        assignee_email: None,
        due_date: None,
        created_at,
        updated_at: created_at,
    }))
}
