//! End-to-end HTTP flows through the router.

use super::helpers::{app, send};
use axum::{Router, http::StatusCode};
use eyre::{OptionExt, ensure};
use rstest::rstest;
use serde_json::{Value, json};

fn find<'a>(list: &'a Value, id: &str) -> Option<&'a Value> {
    list.as_array()?.iter().find(|task| task["id"] == id)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buy_books_walks_the_whole_lifecycle(app: Router) -> eyre::Result<()> {
    let (status, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "Buy books",
            "description": "Buy books for the next school year",
        })),
    )
    .await?;
    ensure!(status == StatusCode::CREATED);
    ensure!(created["status"] == "active");
    let id = created["id"]
        .as_str()
        .ok_or_eyre("created task has an id")?
        .to_owned();

    let (status, reply) = send(
        &app,
        "PUT",
        &format!("/tasks/{id}/status"),
        Some(json!({ "status": "completed" })),
    )
    .await?;
    ensure!(status == StatusCode::OK);
    ensure!(reply == json!({ "message": "Task status updated successfully" }));

    let (_, list) = send(&app, "GET", "/tasks", None).await?;
    ensure!(find(&list, &id).ok_or_eyre("task listed")?["status"] == "completed");

    let (status, reply) = send(&app, "DELETE", &format!("/tasks/{id}"), None).await?;
    ensure!(status == StatusCode::OK);
    ensure!(reply == json!({ "message": "Task deleted successfully" }));
    let (_, list) = send(&app, "GET", "/tasks", None).await?;
    let deleted = find(&list, &id).ok_or_eyre("task still listed")?;
    ensure!(deleted["status"] == "deleted");
    ensure!(!deleted["deleted_at"].is_null());

    let (status, reply) = send(&app, "PUT", &format!("/tasks/{id}/restore"), None).await?;
    ensure!(status == StatusCode::OK);
    ensure!(reply == json!({ "message": "Task restored successfully" }));
    let (_, list) = send(&app, "GET", "/tasks", None).await?;
    let restored = find(&list, &id).ok_or_eyre("task still listed")?;
    ensure!(restored["status"] == "active");
    ensure!(restored["deleted_at"].is_null());

    let (status, reply) = send(&app, "DELETE", &format!("/tasks/{id}/permanent"), None).await?;
    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(reply == json!({ "error": "Cannot permanently delete a task that is not deleted" }));
    let (_, list) = send(&app, "GET", "/tasks", None).await?;
    ensure!(find(&list, &id).is_some());

    send(&app, "DELETE", &format!("/tasks/{id}"), None).await?;
    let (status, reply) = send(&app, "DELETE", &format!("/tasks/{id}/permanent"), None).await?;
    ensure!(status == StatusCode::OK);
    ensure!(reply == json!({ "message": "Task permanently deleted" }));
    let (_, list) = send(&app, "GET", "/tasks", None).await?;
    ensure!(find(&list, &id).is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn permanently_deleted_task_is_gone_for_every_route(app: Router) -> eyre::Result<()> {
    let (_, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({ "title": "Ephemeral", "description": "Soon gone" })),
    )
    .await?;
    let id = created["id"].as_str().ok_or_eyre("id")?.to_owned();
    send(&app, "DELETE", &format!("/tasks/{id}"), None).await?;
    let (status, _) = send(&app, "DELETE", &format!("/tasks/{id}/permanent"), None).await?;
    ensure!(status == StatusCode::OK);

    let (status, reply) = send(&app, "DELETE", &format!("/tasks/{id}/permanent"), None).await?;
    ensure!(status == StatusCode::NOT_FOUND);
    ensure!(reply == json!({ "error": "Task not found" }));

    let (status, _) = send(&app, "PUT", &format!("/tasks/{id}/restore"), None).await?;
    ensure!(status == StatusCode::NOT_FOUND);
    Ok(())
}
