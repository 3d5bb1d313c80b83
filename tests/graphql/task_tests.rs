//! Task, status and comment behaviour through the schema.

use super::helpers::{CREATE_TASK, Client, UPDATE_TASK_STATUS, client, error_code, string_at};
use rstest::{fixture, rstest};
use serde_json::json;

const ADD_COMMENT: &str = r"
    mutation AddComment($taskId: ID!, $content: String!, $authorEmail: String!) {
        addComment(taskId: $taskId, content: $content, authorEmail: $authorEmail) {
            comment { id content authorEmail createdAt task { title } }
        }
    }
";

const MISSING_ID: &str = "00000000-0000-0000-0000-000000000000";

/// A client holding one organization with one empty project.
#[fixture]
async fn seeded() -> Result<(Client, String), eyre::Report> {
    let seeded_client = client();
    seeded_client.create_organization("Acme").await?;
    let project_id = seeded_client.create_project("Website", "acme").await?;
    Ok((seeded_client, project_id))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_starts_as_todo(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;

    let data = client
        .data(
            CREATE_TASK,
            json!({
                "projectId": project_id,
                "title": "Hero banner",
                "assigneeEmail": "designer@example.com",
                "dueDate": "2026-11-20"
            }),
        )
        .await?;

    assert_eq!(
        data.pointer("/createTask/task"),
        Some(&json!({
            "id": string_at(&data, "/createTask/task/id")?,
            "title": "Hero banner",
            "status": "TODO",
            "assigneeEmail": "designer@example.com",
            "dueDate": "2026-11-20"
        }))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_for_unknown_project_persists_nothing(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;

    let error = client
        .error(CREATE_TASK, json!({ "projectId": MISSING_ID, "title": "Lost" }))
        .await?;

    assert_eq!(error.message, "Project not found");
    assert_eq!(error_code(&error).as_deref(), Some("NOT_FOUND"));
    assert_eq!(client.counts(&project_id).await?, (0, 0));
    Ok(())
}

#[rstest]
#[case("DONE", "DONE")]
#[case("in_progress", "IN_PROGRESS")]
#[case("Todo", "TODO")]
#[tokio::test(flavor = "multi_thread")]
async fn status_updates_are_visible_to_the_next_fetch(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
    #[case] input: &str,
    #[case] expected: &str,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;
    let task_id = client.create_task(&project_id, "Ship it").await?;

    let updated = client
        .data(
            UPDATE_TASK_STATUS,
            json!({ "taskId": task_id, "status": input }),
        )
        .await?;
    let fetched = client
        .data(
            "query ($id: ID!) { project(id: $id) { tasks { status } } }",
            json!({ "id": project_id }),
        )
        .await?;

    assert_eq!(
        string_at(&updated, "/updateTaskStatus/task/status")?,
        expected
    );
    assert_eq!(string_at(&fetched, "/project/tasks/0/status")?, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_update_on_unknown_task_is_not_found(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, _) = seeded?;

    let error = client
        .error(
            UPDATE_TASK_STATUS,
            json!({ "taskId": MISSING_ID, "status": "DONE" }),
        )
        .await?;

    assert_eq!(error.message, "Task not found");
    assert_eq!(error_code(&error).as_deref(), Some("NOT_FOUND"));
    Ok(())
}

#[rstest]
#[case("ARCHIVED")]
#[case("")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_is_rejected_before_lookup(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
    #[case] status: &str,
) -> Result<(), eyre::Report> {
    let (client, _) = seeded?;

    let error = client
        .error(
            UPDATE_TASK_STATUS,
            json!({ "taskId": MISSING_ID, "status": status }),
        )
        .await?;

    assert_eq!(error.message, format!("unknown task status: {status}"));
    assert_eq!(error_code(&error).as_deref(), Some("BAD_USER_INPUT"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn counters_follow_status_changes_across_done(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;
    let first = client.create_task(&project_id, "One").await?;
    client.create_task(&project_id, "Two").await?;
    client.create_task(&project_id, "Three").await?;
    assert_eq!(client.counts(&project_id).await?, (3, 0));

    client
        .data(UPDATE_TASK_STATUS, json!({ "taskId": first, "status": "DONE" }))
        .await?;
    assert_eq!(client.counts(&project_id).await?, (3, 1));

    client
        .data(
            UPDATE_TASK_STATUS,
            json!({ "taskId": first, "status": "IN_PROGRESS" }),
        )
        .await?;
    assert_eq!(client.counts(&project_id).await?, (3, 0));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_round_trip_through_project_details(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;
    let task_id = client.create_task(&project_id, "Review copy").await?;

    let added = client
        .data(
            ADD_COMMENT,
            json!({
                "taskId": task_id,
                "content": "Needs a shorter headline",
                "authorEmail": "editor@example.com"
            }),
        )
        .await?;
    let details = client
        .data(
            "query ($id: ID!) { project(id: $id) { tasks { comments { content authorEmail } } } }",
            json!({ "id": project_id }),
        )
        .await?;

    assert_eq!(
        string_at(&added, "/addComment/comment/task/title")?,
        "Review copy"
    );
    assert_eq!(
        details.pointer("/project/tasks/0/comments"),
        Some(&json!([{
            "content": "Needs a shorter headline",
            "authorEmail": "editor@example.com"
        }]))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_on_unknown_task_is_not_found(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, _) = seeded?;

    let error = client
        .error(
            ADD_COMMENT,
            json!({ "taskId": MISSING_ID, "content": "hello", "authorEmail": "a@example.com" }),
        )
        .await?;

    assert_eq!(error.message, "Task not found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_clears_explicit_nulls_only(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;
    let created = client
        .data(
            CREATE_TASK,
            json!({
                "projectId": project_id,
                "title": "Draft",
                "description": "Keep me",
                "assigneeEmail": "a@example.com",
                "dueDate": "2026-12-01"
            }),
        )
        .await?;
    let task_id = string_at(&created, "/createTask/task/id")?;

    let data = client
        .data(
            r"mutation ($id: ID!, $title: String, $assigneeEmail: String) {
                updateTask(id: $id, title: $title, assigneeEmail: $assigneeEmail) {
                    task { title description assigneeEmail dueDate status }
                }
            }",
            json!({ "id": task_id, "title": "Final", "assigneeEmail": null }),
        )
        .await?;

    assert_eq!(
        data,
        json!({ "updateTask": { "task": {
            "title": "Final",
            "description": "Keep me",
            "assigneeEmail": null,
            "dueDate": "2026-12-01",
            "status": "TODO"
        } } })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_object_field_resolves_through_nested_relations(
    #[future(awt)] seeded: Result<(Client, String), eyre::Report>,
) -> Result<(), eyre::Report> {
    let (client, project_id) = seeded?;
    let task_id = client.create_task(&project_id, "Audit").await?;
    client
        .data(
            ADD_COMMENT,
            json!({ "taskId": task_id, "content": "Started", "authorEmail": "qa@example.com" }),
        )
        .await?;

    let data = client
        .data(
            r"query ($slug: String!) {
                organization(slug: $slug) {
                    id name slug contactEmail createdAt
                    projects {
                        id name description status dueDate createdAt updatedAt
                        taskCount completedTaskCount
                        organization { slug }
                        tasks {
                            id title description status assigneeEmail dueDate
                            createdAt updatedAt
                            project { id }
                            comments { id content authorEmail createdAt task { id } }
                        }
                    }
                }
            }",
            json!({ "slug": "acme" }),
        )
        .await?;

    let project = data
        .pointer("/organization/projects/0")
        .ok_or_else(|| eyre::eyre!("missing project in {data}"))?;
    assert_eq!(string_at(&data, "/organization/name")?, "Acme");
    assert_eq!(string_at(project, "/id")?, project_id);
    assert_eq!(string_at(project, "/status")?, "ACTIVE");
    assert_eq!(string_at(project, "/organization/slug")?, "acme");
    assert_eq!(project.pointer("/taskCount"), Some(&json!(1)));
    assert_eq!(project.pointer("/completedTaskCount"), Some(&json!(0)));
    assert_eq!(string_at(project, "/tasks/0/project/id")?, project_id);
    assert_eq!(string_at(project, "/tasks/0/comments/0/content")?, "Started");
    assert_eq!(string_at(project, "/tasks/0/comments/0/task/id")?, task_id);
    assert!(!string_at(project, "/tasks/0/createdAt")?.is_empty());
    Ok(())
}
