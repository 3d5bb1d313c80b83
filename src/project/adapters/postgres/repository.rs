//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, ProjectChangeset, ProjectRow},
    schema::projects,
};
use crate::organization::domain::OrganizationId;
use crate::persistence::{PgPool, run_blocking};
use crate::project::{
    domain::{PersistedProjectData, Project, ProjectId, ProjectName, ProjectStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let new_row = to_new_row(project);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectRepositoryError::DuplicateProject(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let changeset = to_changeset(project);

        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(projects::table.find(project_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        run_blocking(&self.pool, move |connection| {
            projects::table
                .filter(projects::organization_id.eq(organization_id.into_inner()))
                .order((projects::created_at.asc(), projects::id.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?
                .into_iter()
                .map(row_to_project)
                .collect()
        })
        .await
    }
}

fn to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        organization_id: project.organization_id().into_inner(),
        name: project.name().as_str().to_owned(),
        description: project.description().to_owned(),
        status: project.status().as_str().to_owned(),
        due_date: project.due_date(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

fn to_changeset(project: &Project) -> ProjectChangeset {
    ProjectChangeset {
        name: project.name().as_str().to_owned(),
        description: project.description().to_owned(),
        status: project.status().as_str().to_owned(),
        due_date: project.due_date(),
        updated_at: project.updated_at(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        organization_id,
        name,
        description,
        status: persisted_status,
        due_date,
        created_at,
        updated_at,
    } = row;

    let status = ProjectStatus::try_from(persisted_status.as_str())
        .map_err(ProjectRepositoryError::persistence)?;
    let data = PersistedProjectData {
        id: ProjectId::from_uuid(id),
        organization_id: OrganizationId::from_uuid(organization_id),
        name: ProjectName::new(name).map_err(ProjectRepositoryError::persistence)?,
        description,
        status,
        due_date,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}
