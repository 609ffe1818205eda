//! Task aggregate root.

use super::{TaskContent, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// `deleted_at` is set exactly while the status is [`TaskStatus::Deleted`].
/// Deserialization goes through [`TaskRecord`], so decoded tasks are
/// validated like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title and description.
    pub content: TaskContent,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest change timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Task as it appears on the wire, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Title as sent.
    pub title: String,
    /// Description as sent.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest change timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let content = TaskContent::new(record.title, record.description)
            .map_err(TaskDomainError::Validation)?;
        if (record.status == TaskStatus::Deleted) != record.deleted_at.is_some() {
            return Err(TaskDomainError::DeletionStampMismatch {
                task_id: record.id,
                status: record.status,
            });
        }
        Ok(Self::from_persisted(PersistedTaskData {
            id: record.id,
            content,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            deleted_at: record.deleted_at,
        }))
    }
}

impl Task {
    /// Creates a new active task.
    #[must_use]
    pub fn new(content: TaskContent, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let (title, description) = content.into_parts();
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Active,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let (title, description) = data.content.into_parts();
        Self {
            id: data.id,
            title,
            description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the task was soft-deleted, if it currently is.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Replaces the title and description. The status is unchanged.
    pub fn revise(&mut self, content: TaskContent, clock: &impl Clock) {
        let (title, description) = content.into_parts();
        self.title = title;
        self.description = description;
        self.touch(clock);
    }

    /// Moves the task to `target`.
    ///
    /// Entering [`TaskStatus::Deleted`] stamps `deleted_at` (an already
    /// deleted task keeps its original stamp); leaving it clears the stamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the lifecycle
    /// does not allow the move. The task is left untouched.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }

        let now = clock.utc();
        self.deleted_at = match target {
            TaskStatus::Deleted => Some(self.deleted_at.unwrap_or(now)),
            TaskStatus::Active | TaskStatus::Completed => None,
        };
        self.status = target;
        self.updated_at = now;
        Ok(())
    }

    /// Checks that the task may be removed for good.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotInTrash`] unless the task is deleted.
    pub const fn ensure_purgeable(&self) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::Deleted => Ok(()),
            TaskStatus::Active | TaskStatus::Completed => Err(TaskDomainError::NotInTrash {
                task_id: self.id,
                status: self.status,
            }),
        }
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
