//! Domain model for the task lifecycle.
//!
//! Tasks move between `active`, `completed`, and `deleted`, and leave the
//! system only through permanent deletion. Infrastructure concerns stay
//! outside this boundary.

mod error;
mod ids;
mod status;
mod task;
mod validation;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskStatus, is_valid_status};
pub use task::{PersistedTaskData, Task, TaskRecord};
pub use validation::{
    DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH, TaskContent, TaskInput, ValidationIssue,
    ValidationReport, coerce_to_text, validate_task_input,
};
