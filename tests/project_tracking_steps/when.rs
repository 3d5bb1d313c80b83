//! When steps for project tracking scenarios.

use super::world::{TrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use workboard::{
    organization::services::CreateOrganizationRequest,
    project::services::CreateProjectRequest,
    task::domain::TaskStatus,
};

#[when(r#"another organization named "{name}" is created"#)]
fn another_organization(world: &mut TrackingWorld, name: String) {
    let result = run_async(
        world
            .services
            .organizations
            .create(CreateOrganizationRequest::new(name)),
    );
    world.last_organization_result = Some(result);
}

#[when(r#"a project named "{name}" is created for organization "{slug}""#)]
fn project_for_organization(world: &mut TrackingWorld, name: String, slug: String) {
    let result = run_async(
        world
            .services
            .projects
            .create(CreateProjectRequest::new(name, slug)),
    );
    world.last_project_result = Some(result);
}

fn set_status(
    world: &TrackingWorld,
    count: usize,
    status: TaskStatus,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        count <= world.tasks.len(),
        "scenario only created {} tasks",
        world.tasks.len()
    );
    for task in world.tasks.iter().take(count) {
        run_async(world.services.tasks.update_status(task.id(), status))
            .wrap_err("update task status for scenario")?;
    }
    Ok(())
}

#[when("{count:usize} tasks are marked done")]
fn tasks_marked_done(world: &mut TrackingWorld, count: usize) -> Result<(), eyre::Report> {
    set_status(world, count, TaskStatus::Done)
}

#[when("{count:usize} task is moved back to in progress")]
fn task_back_in_progress(world: &mut TrackingWorld, count: usize) -> Result<(), eyre::Report> {
    set_status(world, count, TaskStatus::InProgress)
}
