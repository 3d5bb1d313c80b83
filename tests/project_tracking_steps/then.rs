//! Then steps for project tracking scenarios.

use super::world::{TrackingWorld, run_async};
use rstest_bdd_macros::then;
use workboard::{
    organization::services::OrganizationServiceError,
    task::domain::TaskProgress,
};

#[then(r#"the first organization has slug "{slug}""#)]
fn first_organization_slug(world: &TrackingWorld, slug: String) -> Result<(), eyre::Report> {
    let organization = world
        .first_organization
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing organization in scenario world"))?;
    eyre::ensure!(
        organization.slug().as_str() == slug,
        "expected slug {slug}, found {}",
        organization.slug().as_str()
    );
    Ok(())
}

#[then("the second creation fails with a duplicate name error")]
fn second_creation_duplicate(world: &TrackingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_organization_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing organization result in scenario world"))?;
    let Err(err @ OrganizationServiceError::DuplicateSlug(_)) = result else {
        return Err(eyre::eyre!("expected duplicate slug error, got {result:?}"));
    };
    eyre::ensure!(
        err.to_string() == "An organization with a similar name already exists.",
        "unexpected duplicate message: {err}"
    );
    Ok(())
}

#[then(r#"project creation fails with "{message}""#)]
fn project_creation_fails(world: &TrackingWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_project_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project result in scenario world"))?;
    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure '{message}', got {other:?}")),
    }
}

#[then(r#"organization "{slug}" lists {count:usize} projects"#)]
fn organization_lists_projects(
    world: &TrackingWorld,
    slug: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let projects = run_async(world.services.projects.list_for_organization(&slug))?;
    eyre::ensure!(
        projects.len() == count,
        "expected {count} projects, found {}",
        projects.len()
    );
    Ok(())
}

#[then("the project reports {total:u64} tasks with {completed:u64} completed")]
fn project_reports_counts(
    world: &TrackingWorld,
    total: u64,
    completed: u64,
) -> Result<(), eyre::Report> {
    let project_id = world.current_project()?.id();
    let progress = run_async(world.services.tasks.progress(project_id))?;
    eyre::ensure!(
        progress == TaskProgress { total, completed },
        "expected {total}/{completed}, found {}/{}",
        progress.total,
        progress.completed
    );
    Ok(())
}
