//! Task lifecycle status and its transition table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open and shown on the active tab.
    Active,
    /// Task has been completed and can be reactivated.
    Completed,
    /// Task has been moved to the trash and can be restored.
    Deleted,
}

impl TaskStatus {
    /// Every status, in tab order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Deleted];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` when a task in this status may move to `target`.
    ///
    /// Repeating the current status is allowed and treated as a no-op that
    /// only refreshes timestamps. A deleted task can only leave the trash by
    /// being restored to [`TaskStatus::Active`].
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        !matches!((self, target), (Self::Deleted, Self::Completed))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Returns `true` when `value` names one of the legal task statuses.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    TaskStatus::try_from(value).is_ok()
}
