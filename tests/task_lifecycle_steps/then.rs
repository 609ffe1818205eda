//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.current_task()?.id();
    let stored = run_async(world.service.find_by_id(id))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the task has a deletion timestamp")]
fn task_has_deletion_timestamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if world.current_task()?.deleted_at().is_none() {
        return Err(eyre::eyre!("expected deleted_at to be set"));
    }
    Ok(())
}

#[then("the task has no deletion timestamp")]
fn task_has_no_deletion_timestamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if let Some(stamp) = world.current_task()?.deleted_at() {
        return Err(eyre::eyre!("expected no deleted_at, found {stamp}"));
    }
    Ok(())
}

#[then("the change fails with an invalid state transition error")]
fn change_fails_with_invalid_transition(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lifecycle result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStateTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStateTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the change fails with an invalid status error")]
fn change_fails_with_invalid_status(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lifecycle result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("the task can no longer be found")]
fn task_cannot_be_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if !world.permanently_deleted {
        return Err(eyre::eyre!("task was not permanently deleted"));
    }
    let id = world.current_task()?.id();
    match run_async(world.service.find_by_id(id)) {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected task to be gone, got {other:?}")),
    }
}
