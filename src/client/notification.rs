//! Transient notifications shown after client operations.

use chrono::{DateTime, TimeDelta, Utc};

/// How long a notification stays visible, in milliseconds.
pub const NOTIFICATION_TTL_MS: i64 = 3000;

/// Notification flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Error,
}

/// A message that expires [`NOTIFICATION_TTL_MS`] after it was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    raised_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification raised at `raised_at`.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at,
        }
    }

    /// Returns the notification kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the notification was raised.
    #[must_use]
    pub const fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    /// Returns the first instant at which the notification is hidden.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.raised_at + TimeDelta::milliseconds(NOTIFICATION_TTL_MS)
    }

    /// Returns `true` while the notification should still be shown.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}
