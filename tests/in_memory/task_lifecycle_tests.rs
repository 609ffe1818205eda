//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestService, service};
use eyre::ensure;
use rstest::rstest;
use taskboard::{
    client::{TaskListPage, TaskListView},
    task::domain::{Task, TaskContent, TaskStatus},
};

async fn create_numbered(service: &TestService, count: usize) -> eyre::Result<Vec<Task>> {
    let mut created = Vec::with_capacity(count);
    for n in 1..=count {
        let content = TaskContent::new(format!("Task {n}"), format!("Description {n}"))?;
        created.push(service.create(content).await?);
    }
    Ok(created)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_newest_first_across_many_tasks(service: TestService) -> eyre::Result<()> {
    let created = create_numbered(&service, 11).await?;
    let listed = service.list_all().await?;

    let expected: Vec<_> = created.iter().rev().map(Task::id).collect();
    let actual: Vec<_> = listed.iter().map(Task::id).collect();
    ensure!(actual == expected, "list order should be newest first");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn eleven_active_tasks_paginate_after_five(service: TestService) -> eyre::Result<()> {
    create_numbered(&service, 11).await?;
    let tasks = service.list_all().await?;
    let mut view = TaskListView::new("active");

    let TaskListPage::Items { items, has_more } = view.render(&tasks, false) else {
        eyre::bail!("expected a populated page");
    };
    ensure!(items.len() == 5);
    ensure!(has_more);
    let first_titles: Vec<&str> = items.iter().map(|item| item.task.title()).collect();
    ensure!(first_titles == vec!["Task 11", "Task 10", "Task 9", "Task 8", "Task 7"]);

    view.show_more();
    let TaskListPage::Items { items, has_more } = view.render(&tasks, false) else {
        eyre::bail!("expected a populated page");
    };
    ensure!(items.len() == 11);
    ensure!(!has_more);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_reachable_status_respects_deleted_at_invariant(
    service: TestService,
) -> eyre::Result<()> {
    let task = service
        .create(TaskContent::new("Invariant", "deleted_at tracks status")?)
        .await?;
    let walk = [
        TaskStatus::Completed,
        TaskStatus::Deleted,
        TaskStatus::Active,
        TaskStatus::Deleted,
        TaskStatus::Deleted,
        TaskStatus::Active,
        TaskStatus::Active,
    ];

    for target in walk {
        let moved = match target {
            TaskStatus::Completed => service.complete(task.id()).await?,
            TaskStatus::Deleted => service.soft_delete(task.id()).await?,
            TaskStatus::Active => service.restore(task.id()).await?,
        };
        ensure!(moved.status() == target);
        ensure!(
            moved.deleted_at().is_some() == (target == TaskStatus::Deleted),
            "deleted_at must be set exactly while deleted"
        );
        ensure!(service.find_by_id(task.id()).await? == moved);
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn permanent_delete_only_removes_the_target(service: TestService) -> eyre::Result<()> {
    let created = create_numbered(&service, 3).await?;
    let Some(victim) = created.get(1) else {
        eyre::bail!("expected three tasks");
    };
    service.soft_delete(victim.id()).await?;
    service.permanent_delete(victim.id()).await?;

    let remaining: Vec<_> = service.list_all().await?.iter().map(Task::id).collect();
    ensure!(remaining.len() == 2);
    ensure!(!remaining.contains(&victim.id()));
    ensure!(service.find_by_id(victim.id()).await.is_err());
    Ok(())
}
