//! Add/edit form state.

use super::{
    manager::TaskManager,
    ports::{ClientError, ClientResult, TaskApi},
};
use crate::task::domain::{
    Task, TaskInput, ValidationIssue, ValidationReport, validate_task_input,
};
use mockable::Clock;

/// A form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The title input.
    Title,
    /// The description input.
    Description,
}

/// Title/description form used both to add and to edit tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    editing: Option<Task>,
    errors: Vec<ValidationIssue>,
}

impl TaskForm {
    /// Creates an empty form in "add" mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Returns the errors from the last validation.
    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Sets the title and clears any displayed errors.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.errors.clear();
    }

    /// Sets the description and clears any displayed errors.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.clear();
    }

    /// Loads `task` into the form for editing.
    pub fn start_editing(&mut self, task: &Task) {
        self.title = task.title().to_owned();
        self.description = task.description().to_owned();
        self.editing = Some(task.clone());
        self.errors.clear();
    }

    /// Leaves edit mode and clears the form.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Clears every field, the edit target, and the errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the current values and stores the resulting errors.
    ///
    /// Returns `true` when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.run_validation().is_valid()
    }

    /// Returns the trimmed values to submit.
    #[must_use]
    pub fn form_data(&self) -> TaskInput {
        TaskInput::new(self.title.trim(), self.description.trim())
    }

    /// Returns the "required" error shown inline under `field`.
    #[must_use]
    pub fn field_error(&self, field: FormField) -> Option<ValidationIssue> {
        let wanted = match field {
            FormField::Title => ValidationIssue::TitleRequired,
            FormField::Description => ValidationIssue::DescriptionRequired,
        };
        self.errors.iter().copied().find(|issue| *issue == wanted)
    }

    /// Returns the errors listed in the general error box.
    #[must_use]
    pub fn general_errors(&self) -> Vec<ValidationIssue> {
        self.errors
            .iter()
            .copied()
            .filter(|issue| !issue.is_required_error())
            .collect()
    }

    /// Validates, then creates or updates the task through `manager`.
    ///
    /// The form is reset on success and kept as-is on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ValidationFailed`] when the form is invalid, or
    /// the manager's failure when the API call fails.
    pub async fn submit<A, C>(&mut self, manager: &mut TaskManager<A, C>) -> ClientResult<()>
    where
        A: TaskApi,
        C: Clock + Send + Sync,
    {
        let report = self.run_validation();
        if !report.is_valid() {
            return Err(ClientError::ValidationFailed(report));
        }
        let data = self.form_data();
        match self.editing.as_ref().map(Task::id) {
            Some(id) => manager.update_task(id, &data).await?,
            None => {
                manager.add_task(&data).await?;
            }
        }
        self.reset();
        Ok(())
    }

    fn run_validation(&mut self) -> ValidationReport {
        let report = validate_task_input(&self.raw_input());
        self.errors = report.errors().to_vec();
        report
    }

    fn raw_input(&self) -> TaskInput {
        TaskInput::new(self.title.as_str(), self.description.as_str())
    }
}
