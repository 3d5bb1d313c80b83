//! Given steps for project tracking scenarios.

use super::world::{TrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workboard::{
    organization::services::CreateOrganizationRequest,
    project::services::CreateProjectRequest,
    task::services::CreateTaskRequest,
};

#[given(r#"an organization named "{name}""#)]
fn organization_named(world: &mut TrackingWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .services
            .organizations
            .create(CreateOrganizationRequest::new(name)),
    )
    .wrap_err("create organization for scenario")?;
    world.first_organization = Some(created);
    Ok(())
}

#[given(r#"a project named "{name}" for organization "{slug}""#)]
fn project_named(
    world: &mut TrackingWorld,
    name: String,
    slug: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .services
            .projects
            .create(CreateProjectRequest::new(name, slug)),
    )
    .wrap_err("create project for scenario")?;
    world.project = Some(created);
    Ok(())
}

#[given("{count:usize} tasks in the project")]
fn tasks_in_project(world: &mut TrackingWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.current_project()?.id();
    for index in 0..count {
        let task = run_async(
            world
                .services
                .tasks
                .create(CreateTaskRequest::new(project_id, format!("Task {index}"))),
        )
        .wrap_err("create task for scenario")?;
        world.tasks.push(task);
    }
    Ok(())
}
