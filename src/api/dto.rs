//! Request and response bodies shared by the server and the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgement returned by mutating endpoints that do not echo the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `PUT /tasks/{id}/status`.
///
/// The status is kept loosely typed so a non-string value is reported as an
/// invalid status rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// Requested status.
    #[serde(default)]
    pub status: Option<Value>,
}

impl StatusChangeRequest {
    /// Creates a request for the given status text.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: Some(Value::String(status.into())),
        }
    }
}

/// Error payload rendered for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Summary of the failure.
    pub error: String,
    /// Individual validation messages, when the failure was a validation one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
