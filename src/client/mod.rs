//! Client-side task management.
//!
//! [`TaskManager`] owns the task list shown to the user and drives every
//! mutation through a [`TaskApi`]. [`TaskForm`] holds the add/edit form and
//! [`TaskListView`] decides what the list renders for a tab.

pub mod form;
pub mod http;
pub mod manager;
pub mod notification;
pub mod ports;
pub mod view;

pub use form::{FormField, TaskForm};
pub use http::HttpTaskApi;
pub use manager::TaskManager;
pub use notification::{NOTIFICATION_TTL_MS, Notification, NotificationKind};
pub use ports::{ClientError, ClientOperation, ClientResult, TaskApi};
pub use view::{
    ActionButton, PAGE_SIZE, Tab, TaskAction, TaskItemView, TaskListPage, TaskListView,
    filter_tasks, format_timestamp,
};
