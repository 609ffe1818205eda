//! Mapping from service failures to HTTP responses.

use super::dto::ErrorBody;
use crate::task::{
    domain::{TaskDomainError, ValidationReport},
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Endpoint-level operation, used to pick the fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /tasks`
    ListTasks,
    /// `GET /tasks/{id}`
    FetchTask,
    /// `POST /tasks`
    CreateTask,
    /// `PUT /tasks/{id}`
    UpdateTask,
    /// `PUT /tasks/{id}/status`
    UpdateStatus,
    /// `DELETE /tasks/{id}`
    DeleteTask,
    /// `PUT /tasks/{id}/restore`
    RestoreTask,
    /// `DELETE /tasks/{id}/permanent`
    PermanentlyDeleteTask,
}

impl Operation {
    /// Message returned when storage fails during this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::ListTasks => "Failed to fetch tasks",
            Self::FetchTask => "Failed to fetch task",
            Self::CreateTask => "Failed to create task",
            Self::UpdateTask => "Failed to update task",
            Self::UpdateStatus => "Failed to update task status",
            Self::DeleteTask => "Failed to delete task",
            Self::RestoreTask => "Failed to restore task",
            Self::PermanentlyDeleteTask => "Failed to permanently delete task",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// An HTTP failure: a status code and its JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Creates an error with a single message.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
                errors: None,
            },
        }
    }

    /// Creates a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates the 404 returned for unknown task identifiers.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Task not found")
    }

    /// Creates the 404 returned for unmatched routes.
    #[must_use]
    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Route not found")
    }

    /// Creates the 400 returned for bodies that are not valid JSON.
    #[must_use]
    pub fn invalid_json() -> Self {
        Self::bad_request("Invalid JSON format")
    }

    /// Creates the 500 returned when a handler panics.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Creates a 400 listing every validation problem.
    #[must_use]
    pub fn validation(report: &ValidationReport) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: report.to_string(),
                errors: Some(report.messages()),
            },
        }
    }

    /// Maps a service failure raised while performing `operation`.
    ///
    /// Storage detail is logged and replaced by the operation's fixed message.
    #[must_use]
    pub fn from_lifecycle(operation: Operation, err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::NotFound(_)
            | TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::task_not_found()
            }
            TaskLifecycleError::Domain(TaskDomainError::Validation(report)) => {
                Self::validation(&report)
            }
            TaskLifecycleError::Domain(TaskDomainError::InvalidTaskId(_)) => {
                Self::bad_request("Invalid task id")
            }
            TaskLifecycleError::Domain(TaskDomainError::InvalidStateTransition {
                from, to, ..
            }) => Self::bad_request(format!("Cannot change task status from {from} to {to}")),
            TaskLifecycleError::Domain(TaskDomainError::NotInTrash { .. }) => {
                Self::bad_request("Cannot permanently delete a task that is not deleted")
            }
            TaskLifecycleError::InvalidStatus(_) => Self::bad_request("Invalid status"),
            TaskLifecycleError::Domain(TaskDomainError::DeletionStampMismatch { .. })
            | TaskLifecycleError::Repository(
                TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Persistence(_),
            ) => {
                tracing::error!(%operation, error = %err, "task storage operation failed");
                Self::bad_request(operation.failure_message())
            }
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response body.
    #[must_use]
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
