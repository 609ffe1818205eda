//! Title and description validation shared by the client and the server.
//!
//! Validation is a pure function over loosely typed input: form fields may be
//! missing, `null`, or carry numbers and booleans when they arrive as JSON.
//! Every applicable problem is collected so the caller can show all of them
//! at once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Maximum title length, in characters, after trimming.
pub const TITLE_MAX_LENGTH: usize = 255;

/// Maximum description length, in characters, after trimming.
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Raw title and description as submitted by a form or request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Submitted title, if any.
    #[serde(default)]
    pub title: Option<Value>,
    /// Submitted description, if any.
    #[serde(default)]
    pub description: Option<Value>,
}

impl TaskInput {
    /// Creates input from plain strings.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            description: Some(Value::String(description.into())),
        }
    }

    /// Returns the title coerced to text.
    #[must_use]
    pub fn title_text(&self) -> String {
        coerce_to_text(self.title.as_ref())
    }

    /// Returns the description coerced to text.
    #[must_use]
    pub fn description_text(&self) -> String {
        coerce_to_text(self.description.as_ref())
    }
}

/// Coerces a loosely typed field to text.
///
/// Missing and `null` values become the empty string, strings are used as-is,
/// numbers and booleans use their display form, and arrays or objects use
/// their compact JSON text.
#[must_use]
pub fn coerce_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
    }
}

/// A single validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    /// Title is empty after trimming.
    TitleRequired,
    /// Description is empty after trimming.
    DescriptionRequired,
    /// Title exceeds [`TITLE_MAX_LENGTH`].
    TitleTooLong,
    /// Description exceeds [`DESCRIPTION_MAX_LENGTH`].
    DescriptionTooLong,
}

impl ValidationIssue {
    /// Returns `true` for the "field is required" problems.
    #[must_use]
    pub const fn is_required_error(self) -> bool {
        matches!(self, Self::TitleRequired | Self::DescriptionRequired)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleRequired => f.write_str("Title is required"),
            Self::DescriptionRequired => f.write_str("Description is required"),
            Self::TitleTooLong => {
                write!(f, "Title is too long (max {TITLE_MAX_LENGTH} characters)")
            }
            Self::DescriptionTooLong => write!(
                f,
                "Description is too long (max {DESCRIPTION_MAX_LENGTH} characters)"
            ),
        }
    }
}

/// Outcome of validating a [`TaskInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns `true` when no problems were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the problems in the order they were detected.
    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Returns the human-readable message for each problem.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationReport {}

/// Validates a title and description.
///
/// # Examples
///
/// ```rust
/// use taskboard::task::domain::{TaskInput, ValidationIssue, validate_task_input};
///
/// let report = validate_task_input(&TaskInput::new("  ", "Pack for the trip"));
/// assert!(!report.is_valid());
/// assert_eq!(report.errors(), &[ValidationIssue::TitleRequired]);
/// ```
#[must_use]
pub fn validate_task_input(input: &TaskInput) -> ValidationReport {
    let raw_title = input.title_text();
    let raw_description = input.description_text();
    let title = raw_title.trim();
    let description = raw_description.trim();

    let mut errors = Vec::new();
    if title.is_empty() {
        errors.push(ValidationIssue::TitleRequired);
    }
    if description.is_empty() {
        errors.push(ValidationIssue::DescriptionRequired);
    }
    if title.chars().count() > TITLE_MAX_LENGTH {
        errors.push(ValidationIssue::TitleTooLong);
    }
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        errors.push(ValidationIssue::DescriptionTooLong);
    }

    ValidationReport { errors }
}

/// Trimmed title and description that passed validation.
///
/// This is the only form in which content reaches persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    title: String,
    description: String,
}

impl TaskContent {
    /// Validates raw input and keeps the trimmed values.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationReport`] when any problem is found.
    pub fn from_input(input: &TaskInput) -> Result<Self, ValidationReport> {
        let report = validate_task_input(input);
        if !report.is_valid() {
            return Err(report);
        }
        Ok(Self {
            title: input.title_text().trim().to_owned(),
            description: input.description_text().trim().to_owned(),
        })
    }

    /// Validates a plain title and description.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationReport`] when any problem is found.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationReport> {
        Self::from_input(&TaskInput::new(title, description))
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Splits the content into `(title, description)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.description)
    }
}
