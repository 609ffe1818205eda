//! `PostgreSQL` repository tests for task persistence.

use super::helpers::{BoxError, clock, repository};
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use taskboard::task::{
    domain::{PersistedTaskData, Task, TaskContent, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

fn sample_task(title: &str, clock: &DefaultClock) -> Result<Task, BoxError> {
    Ok(Task::new(TaskContent::new(title, "Persisted in PostgreSQL")?, clock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn store_and_find_round_trip(clock: DefaultClock) -> Result<(), BoxError> {
    let repo = repository().await?;
    let task = sample_task("Round trip", &clock)?;
    repo.store(&task).await?;

    let found = repo.find_by_id(task.id()).await?.ok_or("task should exist")?;
    assert_eq!(found.id(), task.id());
    assert_eq!(found.title(), task.title());
    assert_eq!(found.status(), TaskStatus::Active);
    assert!(found.deleted_at().is_none());

    repo.remove(task.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn duplicate_store_is_rejected(clock: DefaultClock) -> Result<(), BoxError> {
    let repo = repository().await?;
    let task = sample_task("Duplicate", &clock)?;
    repo.store(&task).await?;

    let result = repo.store(&task).await;
    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));

    repo.remove(task.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn update_persists_status_and_deletion_stamp(clock: DefaultClock) -> Result<(), BoxError> {
    let repo = repository().await?;
    let mut task = sample_task("Soft delete", &clock)?;
    repo.store(&task).await?;

    task.transition_to(TaskStatus::Deleted, &clock)?;
    repo.update(&task).await?;
    let deleted = repo.find_by_id(task.id()).await?.ok_or("task should exist")?;
    assert_eq!(deleted.status(), TaskStatus::Deleted);
    assert!(deleted.deleted_at().is_some());

    task.transition_to(TaskStatus::Active, &clock)?;
    repo.update(&task).await?;
    let restored = repo.find_by_id(task.id()).await?.ok_or("task should exist")?;
    assert_eq!(restored.status(), TaskStatus::Active);
    assert!(restored.deleted_at().is_none());

    repo.remove(task.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn missing_rows_report_not_found(clock: DefaultClock) -> Result<(), BoxError> {
    let repo = repository().await?;
    let task = sample_task("Never stored", &clock)?;

    assert!(matches!(
        repo.update(&task).await,
        Err(TaskRepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repo.remove(task.id()).await,
        Err(TaskRepositoryError::NotFound(_))
    ));
    assert!(repo.find_by_id(task.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn list_all_is_newest_first(clock: DefaultClock) -> Result<(), BoxError> {
    let repo = repository().await?;
    let older = sample_task("Older", &clock)?;
    repo.store(&older).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = sample_task("Newer", &clock)?;
    repo.store(&newer).await?;

    let ids: Vec<_> = repo.list_all().await?.iter().map(Task::id).collect();
    let newer_pos = ids.iter().position(|id| *id == newer.id());
    let older_pos = ids.iter().position(|id| *id == older.id());
    assert!(newer_pos < older_pos, "newer task should be listed first");

    repo.remove(older.id()).await?;
    repo.remove(newer.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "Requires PostgreSQL at TASKBOARD_TEST_DATABASE_URL"]
async fn equal_creation_times_list_latest_insert_first(
    clock: DefaultClock,
) -> Result<(), BoxError> {
    let repo = repository().await?;
    let instant = clock.utc();
    let twin = |title: &str| -> Result<Task, BoxError> {
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            content: TaskContent::new(title, "Same instant")?,
            status: TaskStatus::Active,
            created_at: instant,
            updated_at: instant,
            deleted_at: None,
        }))
    };
    let first = twin("First")?;
    let second = twin("Second")?;
    repo.store(&first).await?;
    repo.store(&second).await?;

    let ids: Vec<_> = repo.list_all().await?.iter().map(Task::id).collect();
    let first_pos = ids.iter().position(|id| *id == first.id());
    let second_pos = ids.iter().position(|id| *id == second.id());
    assert!(
        second_pos < first_pos,
        "later insert should be listed first"
    );

    repo.remove(first.id()).await?;
    repo.remove(second.id()).await?;
    Ok(())
}
