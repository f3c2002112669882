//! Error kinds raised while validating user input against tasks.
//!
//! Storage failures are not listed here: they surface as
//! [`rusqlite::Error`] inside [`anyhow::Error`] and are never recovered.

use thiserror::Error;

/// Errors that can occur during task operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task title is empty after trimming.
    #[error("Task title cannot be empty")]
    EmptyTitle,
    /// Field name outside of the editable set.
    #[error("Invalid field '{0}'. Only 'title' or 'description' can be edited")]
    InvalidField(String),
    /// Difficulty token other than hard, medium or easy.
    #[error("Invalid priority '{0}'. Choose: hard, medium, or easy")]
    InvalidPriority(String),
    /// Value that cannot be stored in the given column.
    #[error("Invalid value '{value}' for column '{field}'")]
    InvalidValue { field: String, value: String },
    /// Column name outside of the update allow-list.
    #[error("Invalid column: {0}")]
    InvalidColumn(String),
    /// Ordinal or id that is not a number in the accepted range.
    #[error("Invalid choice '{0}'")]
    InvalidSelection(String),
    /// Task with the given id does not exist.
    #[error("Task {0} not found")]
    NotFound(i64),
}

impl TaskError {
    /// True for the validation family (bad title, field, priority or value).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle | Self::InvalidField(_) | Self::InvalidPriority(_) | Self::InvalidValue { .. }
        )
    }
}
