//! Client-side task state and the operations that change it.

use super::{
    notification::{Notification, NotificationKind},
    ports::{ClientError, ClientOperation, ClientResult, TaskApi},
};
use crate::task::domain::{Task, TaskContent, TaskId, TaskInput, TaskStatus};
use mockable::Clock;
use std::sync::Arc;

/// Owns the task list and the feedback shown around it.
///
/// Every mutation follows the same pattern: call the API, then on success
/// raise a success notification and reload the whole list; on failure record
/// the error, raise an error notification, and return the failure. A failed
/// reload after a successful mutation is recorded but does not fail the
/// mutation.
pub struct TaskManager<A, C>
where
    A: TaskApi,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    notification: Option<Notification>,
}

impl<A, C> TaskManager<A, C>
where
    A: TaskApi,
    C: Clock + Send + Sync,
{
    /// Creates a manager with an empty list.
    #[must_use]
    pub const fn new(api: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            api,
            clock,
            tasks: Vec::new(),
            loading: false,
            error: None,
            notification: None,
        }
    }

    /// Returns the last loaded tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a reload is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last recorded failure message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the notification if it has not expired yet.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_at(self.clock.utc())
    }

    /// Returns the notification if it is still visible at `now`.
    #[must_use]
    pub fn notification_at(&self, now: chrono::DateTime<chrono::Utc>) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|notification| notification.is_visible_at(now))
    }

    /// Hides the current notification before it expires.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Reloads the task list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the list cannot be
    /// fetched; the previous list is kept.
    pub async fn load_tasks(&mut self) -> ClientResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.api.fetch_tasks().await;
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validates and creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ValidationFailed`] without calling the API when
    /// the input is invalid, or [`ClientError::OperationFailed`] when the call
    /// fails.
    pub async fn add_task(&mut self, input: &TaskInput) -> ClientResult<Task> {
        let content = TaskContent::from_input(input).map_err(ClientError::ValidationFailed)?;
        let result = self.api.create_task(&content).await;
        self.settle(ClientOperation::AddTask, result).await
    }

    /// Validates and applies a title/description edit.
    ///
    /// # Errors
    ///
    /// See [`TaskManager::add_task`].
    pub async fn update_task(&mut self, id: TaskId, input: &TaskInput) -> ClientResult<()> {
        let content = TaskContent::from_input(input).map_err(ClientError::ValidationFailed)?;
        let result = self.api.update_task(id, &content).await;
        self.settle(ClientOperation::UpdateTask, result).await
    }

    /// Moves a task to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn change_status(&mut self, id: TaskId, status: TaskStatus) -> ClientResult<()> {
        let result = self.api.update_task_status(id, status).await;
        self.settle(ClientOperation::UpdateStatus, result).await
    }

    /// Marks a task completed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn complete_task(&mut self, id: TaskId) -> ClientResult<()> {
        self.change_status(id, TaskStatus::Completed).await
    }

    /// Moves a completed task back to active.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn reactivate_task(&mut self, id: TaskId) -> ClientResult<()> {
        self.change_status(id, TaskStatus::Active).await
    }

    /// Moves a task to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn delete_task(&mut self, id: TaskId) -> ClientResult<()> {
        let result = self.api.delete_task(id).await;
        self.settle(ClientOperation::DeleteTask, result).await
    }

    /// Brings a task back from the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn restore_task(&mut self, id: TaskId) -> ClientResult<()> {
        let result = self.api.restore_task(id).await;
        self.settle(ClientOperation::RestoreTask, result).await
    }

    /// Removes a task for good.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationFailed`] when the call fails.
    pub async fn permanently_delete_task(&mut self, id: TaskId) -> ClientResult<()> {
        let result = self.api.permanently_delete_task(id).await;
        self.settle(ClientOperation::PermanentlyDeleteTask, result).await
    }

    async fn settle<T>(
        &mut self,
        operation: ClientOperation,
        result: ClientResult<T>,
    ) -> ClientResult<T> {
        match result {
            Ok(value) => {
                if let Some(message) = operation.success_message() {
                    self.notify(NotificationKind::Success, message);
                }
                if let Err(err) = self.load_tasks().await {
                    tracing::warn!(%operation, error = %err, "reload after mutation failed");
                }
                Ok(value)
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(message.clone());
                self.notify(NotificationKind::Error, message);
                Err(err)
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification::new(kind, message, self.clock.utc()));
    }
}
