//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus, ValidationReport};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Title or description failed validation.
    #[error("{0}")]
    Validation(ValidationReport),

    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),

    /// The requested status change is not permitted by the lifecycle.
    #[error("cannot transition task {task_id} from {from} to {to}")]
    InvalidStateTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// `deleted_at` is present without the deleted status, or missing with it.
    #[error("task {task_id} is {status} but its deletion timestamp disagrees")]
    DeletionStampMismatch {
        /// Task carrying the inconsistent stamp.
        task_id: TaskId,
        /// Status it claims.
        status: TaskStatus,
    },

    /// Only a task in the trash may be removed for good.
    #[error("cannot permanently delete task {task_id} while it is {status}")]
    NotInTrash {
        /// Task whose removal was rejected.
        task_id: TaskId,
        /// Current status.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task status '{0}', expected one of active, completed, deleted")]
pub struct ParseTaskStatusError(pub String);
