//! Port the client uses to reach the task API.

use crate::task::domain::{Task, TaskContent, TaskId, TaskStatus, ValidationReport};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Client-side operation, used to pick user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOperation {
    /// Loading the task list.
    FetchTasks,
    /// Creating a task.
    AddTask,
    /// Editing a task's title and description.
    UpdateTask,
    /// Changing a task's status.
    UpdateStatus,
    /// Moving a task to the trash.
    DeleteTask,
    /// Bringing a task back from the trash.
    RestoreTask,
    /// Removing a task for good.
    PermanentlyDeleteTask,
}

impl ClientOperation {
    /// Message shown when the operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::FetchTasks => "Failed to fetch tasks",
            Self::AddTask => "Failed to add task",
            Self::UpdateTask => "Failed to update task",
            Self::UpdateStatus => "Failed to update task status",
            Self::DeleteTask => "Failed to delete task",
            Self::RestoreTask => "Failed to restore task",
            Self::PermanentlyDeleteTask => "Failed to permanently delete task",
        }
    }

    /// Message shown when the operation succeeds, if it is announced at all.
    #[must_use]
    pub const fn success_message(self) -> Option<&'static str> {
        match self {
            Self::FetchTasks => None,
            Self::AddTask => Some("Task added successfully"),
            Self::UpdateTask => Some("Task updated successfully"),
            Self::UpdateStatus => Some("Task status updated successfully"),
            Self::DeleteTask => Some("Task deleted successfully"),
            Self::RestoreTask => Some("Task restored successfully"),
            Self::PermanentlyDeleteTask => Some("Task permanently deleted"),
        }
    }
}

impl fmt::Display for ClientOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Failures surfaced to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The API call failed; the detail is logged, not shown.
    #[error("{0}")]
    OperationFailed(ClientOperation),
    /// Input was rejected before any request was sent.
    #[error("{0}")]
    ValidationFailed(ValidationReport),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Remote task API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches every task, newest first.
    async fn fetch_tasks(&self) -> ClientResult<Vec<Task>>;

    /// Creates a task and returns it as stored.
    async fn create_task(&self, content: &TaskContent) -> ClientResult<Task>;

    /// Replaces a task's title and description.
    async fn update_task(&self, id: TaskId, content: &TaskContent) -> ClientResult<()>;

    /// Moves a task to `status`.
    async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> ClientResult<()>;

    /// Moves a task to the trash.
    async fn delete_task(&self, id: TaskId) -> ClientResult<()>;

    /// Brings a task back from the trash.
    async fn restore_task(&self, id: TaskId) -> ClientResult<()>;

    /// Removes a task for good.
    async fn permanently_delete_task(&self, id: TaskId) -> ClientResult<()>;
}
