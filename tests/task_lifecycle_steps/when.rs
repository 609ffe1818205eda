//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::Task,
    services::{TaskLifecycleError, TransitionTaskRequest},
};

fn record(world: &mut TaskLifecycleWorld, result: Result<Task, TaskLifecycleError>) {
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_result = Some(result);
}

#[when(r#"the task is moved to "{status}""#)]
fn move_task(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let result = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(id, status)),
    );
    record(world, result);
    Ok(())
}

#[when("the task is restored")]
fn restore_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let result = run_async(world.service.restore(id));
    record(world, result);
    Ok(())
}

#[when("the task is permanently deleted")]
fn permanently_delete(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    run_async(world.service.permanent_delete(id)).wrap_err("permanently delete task")?;
    world.permanently_deleted = true;
    Ok(())
}
