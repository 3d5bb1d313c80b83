//! Project storage against `PostgreSQL`.

use crate::postgres::helpers::{BoxError, TestDatabase, at, database, organization, project};
use chrono::NaiveDate;
use rstest::rstest;
use workboard::{
    app::Repositories,
    project::{
        domain::{PersistedProjectData, Project, ProjectId, ProjectName, ProjectStatus},
        ports::ProjectRepositoryError,
    },
};

#[rstest]
fn projects_are_listed_per_organization_oldest_first(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    let acme = organization("Acme", at(0))?;
    let globex = organization("Globex", at(1))?;
    db.run(repos.organizations.store(&acme))?;
    db.run(repos.organizations.store(&globex))?;
    let late = project(acme.id(), "Launch", at(30))?;
    let early = project(acme.id(), "Research", at(10))?;
    let foreign = project(globex.id(), "Elsewhere", at(20))?;
    for stored in [&late, &foreign, &early] {
        db.run(repos.projects.store(stored))?;
    }

    let names: Vec<String> = db
        .run(repos.projects.list_by_organization(acme.id()))?
        .iter()
        .map(|found| found.name().as_str().to_owned())
        .collect();

    assert_eq!(names, ["Research", "Launch"]);
    assert_eq!(
        db.run(repos.projects.find_by_id(foreign.id()))?,
        Some(foreign)
    );
    Ok(())
}

#[rstest]
fn update_persists_every_mutable_column(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    let acme = organization("Acme", at(0))?;
    db.run(repos.organizations.store(&acme))?;
    let due = NaiveDate::from_ymd_opt(2026, 12, 24).ok_or("invalid date")?;
    let original = Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(),
        organization_id: acme.id(),
        name: ProjectName::new("Website")?,
        description: "Marketing site".to_owned(),
        status: ProjectStatus::Active,
        due_date: Some(due),
        created_at: at(5),
        updated_at: at(5),
    });
    db.run(repos.projects.store(&original))?;
    let revised = Project::from_persisted(PersistedProjectData {
        id: original.id(),
        organization_id: acme.id(),
        name: ProjectName::new("Website v2")?,
        description: String::new(),
        status: ProjectStatus::OnHold,
        due_date: None,
        created_at: at(5),
        updated_at: at(60),
    });

    db.run(repos.projects.update(&revised))?;

    assert_eq!(
        db.run(repos.projects.find_by_id(original.id()))?,
        Some(revised)
    );
    Ok(())
}

#[rstest]
fn update_of_unknown_project_reports_not_found(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    let acme = organization("Acme", at(0))?;
    db.run(repos.organizations.store(&acme))?;
    let missing = project(acme.id(), "Never stored", at(1))?;

    let result = db.run(repos.projects.update(&missing));

    assert!(
        matches!(result, Err(ProjectRepositoryError::NotFound(id)) if id == missing.id()),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}
