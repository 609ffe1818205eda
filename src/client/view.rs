//! What the task list renders for a tab.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use std::fmt;

/// Items shown before the "show more" control.
pub const PAGE_SIZE: usize = 5;

/// A list tab. Each tab shows the tasks with the matching status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Open tasks.
    Active,
    /// Finished tasks.
    Completed,
    /// Tasks in the trash.
    Deleted,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Deleted];

    /// Parses a tab key; unknown keys yield `None`.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }

    /// Returns the tab key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        self.status().as_str()
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Deleted => "Deleted",
        }
    }

    /// Returns the status shown on this tab.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        match self {
            Self::Active => TaskStatus::Active,
            Self::Completed => TaskStatus::Completed,
            Self::Deleted => TaskStatus::Deleted,
        }
    }

    const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Active => Self::Active,
            TaskStatus::Completed => Self::Completed,
            TaskStatus::Deleted => Self::Deleted,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the tasks shown under `tab`, keeping their order.
///
/// An unknown tab key shows every task.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], tab: &str) -> Vec<&'a Task> {
    match Tab::parse(tab) {
        Some(known) => tasks
            .iter()
            .filter(|task| task.status() == known.status())
            .collect(),
        None => tasks.iter().collect(),
    }
}

/// Formats a timestamp for item captions, or `N/A` when absent.
#[must_use]
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || "N/A".to_owned(),
        |value| value.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// A per-item action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Mark completed.
    Complete,
    /// Load into the form.
    Edit,
    /// Move to the trash.
    Delete,
    /// Move a completed task back to active.
    Reactivate,
    /// Bring back from the trash.
    Restore,
    /// Remove for good.
    DeletePermanently,
}

impl TaskAction {
    /// Returns the button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Reactivate => "Reactivate",
            Self::Restore => "Restore",
            Self::DeletePermanently => "Delete Permanently",
        }
    }
}

/// An action button and whether it can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    /// Action triggered by the button.
    pub action: TaskAction,
    /// `false` renders the button disabled.
    pub enabled: bool,
}

impl ActionButton {
    const fn enabled(action: TaskAction) -> Self {
        Self {
            action,
            enabled: true,
        }
    }
}

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemView<'a> {
    /// The task shown.
    pub task: &'a Task,
    /// `Created: <when>` or, on the deleted tab, `Deleted: <when>`.
    pub caption: String,
    /// Buttons shown next to the task.
    pub actions: Vec<ActionButton>,
}

impl<'a> TaskItemView<'a> {
    fn new(tab: Tab, task: &'a Task) -> Self {
        let caption = match tab {
            Tab::Deleted => format!("Deleted: {}", format_timestamp(task.deleted_at())),
            Tab::Active | Tab::Completed => {
                format!("Created: {}", format_timestamp(Some(task.created_at())))
            }
        };
        let actions = match tab {
            Tab::Active => vec![
                ActionButton {
                    action: TaskAction::Complete,
                    enabled: task.status() != TaskStatus::Completed,
                },
                ActionButton::enabled(TaskAction::Edit),
                ActionButton::enabled(TaskAction::Delete),
            ],
            Tab::Completed => vec![
                ActionButton::enabled(TaskAction::Reactivate),
                ActionButton::enabled(TaskAction::Delete),
            ],
            Tab::Deleted => vec![
                ActionButton::enabled(TaskAction::Restore),
                ActionButton::enabled(TaskAction::DeletePermanently),
            ],
        };
        Self {
            task,
            caption,
            actions,
        }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListPage<'a> {
    /// A fetch is in flight.
    Loading,
    /// No task matches the tab.
    Empty {
        /// `No {tab} tasks yet.`
        message: String,
    },
    /// The visible items.
    Items {
        /// Items in display order.
        items: Vec<TaskItemView<'a>>,
        /// `true` when a "show more" control should follow the items.
        has_more: bool,
    },
}

/// Per-tab list state: which tab is selected and whether it is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    tab: String,
    show_all: bool,
}

impl TaskListView {
    /// Creates a collapsed view of `tab`.
    #[must_use]
    pub fn new(tab: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            show_all: false,
        }
    }

    /// Returns the selected tab key.
    #[must_use]
    pub fn tab(&self) -> &str {
        &self.tab
    }

    /// Returns `true` once "show more" was activated.
    #[must_use]
    pub const fn is_showing_all(&self) -> bool {
        self.show_all
    }

    /// Reveals every item. The control stays hidden until the view is
    /// recreated.
    pub fn show_more(&mut self) {
        self.show_all = true;
    }

    /// Renders `tasks` for the selected tab.
    #[must_use]
    pub fn render<'a>(&self, tasks: &'a [Task], loading: bool) -> TaskListPage<'a> {
        if loading {
            return TaskListPage::Loading;
        }
        let filtered = filter_tasks(tasks, &self.tab);
        if filtered.is_empty() {
            return TaskListPage::Empty {
                message: format!("No {} tasks yet.", self.tab),
            };
        }

        let has_more = !self.show_all && filtered.len() > PAGE_SIZE;
        let limit = if self.show_all { filtered.len() } else { PAGE_SIZE };
        let selected = Tab::parse(&self.tab);
        let items = filtered
            .into_iter()
            .take(limit)
            .map(|task| {
                let tab = selected.unwrap_or_else(|| Tab::for_status(task.status()));
                TaskItemView::new(tab, task)
            })
            .collect();
        TaskListPage::Items { items, has_more }
    }
}
