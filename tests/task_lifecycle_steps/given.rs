//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{domain::TaskContent, services::TransitionTaskRequest};

#[given(r#"a task titled "{title}" described as "{description}""#)]
fn task_exists(
    world: &mut TaskLifecycleWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let content = TaskContent::new(title, description)
        .map_err(|report| eyre::eyre!("invalid scenario task content: {report}"))?;
    let created =
        run_async(world.service.create(content)).wrap_err("create task for lifecycle scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let moved = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(id, status)),
    )
    .wrap_err("move task in scenario setup")?;
    world.task = Some(moved);
    Ok(())
}
