//! Service layer for task creation, editing, and status transitions.

use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskContent, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for moving a task to a caller-supplied status.
///
/// The status arrives as text so unknown values are rejected here rather than
/// at the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }

    /// Returns the task to transition.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested status text.
    #[must_use]
    pub fn target_status(&self) -> &str {
        &self.target_status
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status is not one of the legal values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` when the failure means the task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task, newest first.
    ///
    /// Filtering by status is a presentation concern and happens client-side.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> = self.repository.list_all().await;
        Ok(result?)
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// identifier, or [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Creates a new active task and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the repository rejects the insert
    /// or the stored row cannot be read back.
    pub async fn create(&self, content: TaskContent) -> TaskLifecycleResult<Task> {
        let task = Task::new(content, &*self.clock);
        self.repository.store(&task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        self.find_by_id(task.id()).await
    }

    /// Replaces a task's title and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, content: TaskContent) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id(id).await?;
        task.revise(content, &*self.clock);
        self.repository.update(&task).await?;
        tracing::debug!(task_id = %id, "task content updated");
        Ok(task)
    }

    /// Moves a task to the status named in the request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for unknown status text,
    /// [`TaskLifecycleError::Domain`] when the lifecycle forbids the move,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.target_status())?;
        self.move_to(request.task_id(), target).await
    }

    /// Marks a task completed.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::transition_task`].
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.move_to(id, TaskStatus::Completed).await
    }

    /// Moves a completed task back to active.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::transition_task`].
    pub async fn reactivate(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.move_to(id, TaskStatus::Active).await
    }

    /// Moves a task to the trash, stamping `deleted_at`.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::transition_task`].
    pub async fn soft_delete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.move_to(id, TaskStatus::Deleted).await
    }

    /// Restores a task from the trash, clearing `deleted_at`.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::transition_task`].
    pub async fn restore(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.move_to(id, TaskStatus::Active).await
    }

    /// Removes a deleted task permanently. This cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when it is not in the trash, or
    /// [`TaskLifecycleError::Repository`] when removal fails.
    pub async fn permanent_delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.find_by_id(id).await?.ensure_purgeable()?;
        self.repository.remove(id).await?;
        tracing::debug!(task_id = %id, "task permanently deleted");
        Ok(())
    }

    async fn move_to(&self, id: TaskId, target: TaskStatus) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id(id).await?;
        let from = task.status();
        task.transition_to(target, &*self.clock)?;
        self.repository.update(&task).await?;
        tracing::debug!(task_id = %id, %from, to = %target, "task status changed");
        Ok(task)
    }
}
