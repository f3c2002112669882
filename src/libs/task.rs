//! Task model, priority levels and typed field updates.

use super::error::TaskError;
use rusqlite::types::{ToSql, ToSqlOutput};
use std::fmt;
use std::str::FromStr;

/// Icon shown for a task without priority.
pub const NO_PRIORITY_ICON: &str = "⚪";

/// Difficulty level of a task.
///
/// The icon is the persisted form; the lowercase difficulty word is the
/// form users type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Hard,
    Medium,
    Easy,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Hard, Priority::Medium, Priority::Easy];

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Hard => "🔴",
            Self::Medium => "🟡",
            Self::Easy => "🟢",
        }
    }

    pub fn from_icon(icon: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.icon() == icon)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    /// Parses a difficulty token (`hard`, `medium`, `easy`), ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "medium" => Ok(Self::Medium),
            "easy" => Ok(Self::Easy),
            _ => Err(TaskError::InvalidPriority(s.trim().to_string())),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.icon()))
    }
}

/// Snapshot of a stored task. Changing it does not touch the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Option<Priority>,
}

impl Task {
    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "✅"
        } else {
            "⬜"
        }
    }

    pub fn priority_icon(&self) -> &'static str {
        self.priority.map_or(NO_PRIORITY_ICON, |p| p.icon())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Incomplete,
    ByPriority(Priority),
}

/// Columns that may be updated after a task is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Completed,
    Priority,
}

impl TaskField {
    pub fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Completed => "completed",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for TaskField {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "completed" => Ok(Self::Completed),
            "priority" => Ok(Self::Priority),
            other => Err(TaskError::InvalidColumn(other.to_string())),
        }
    }
}

/// Fields a user may change through the edit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Title,
    Description,
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
        }
    }
}

impl FromStr for EditableField {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            _ => Err(TaskError::InvalidField(s.trim().to_string())),
        }
    }
}

/// A single-column change, carrying a value already typed for that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUpdate {
    Title(String),
    Description(String),
    Completed(bool),
    Priority(Option<Priority>),
}

impl TaskUpdate {
    /// Builds a title update, trimming it and rejecting blanks.
    pub fn title(title: &str) -> Result<Self, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(Self::Title(title.to_string()))
    }

    pub fn edit(field: EditableField, value: &str) -> Result<Self, TaskError> {
        match field {
            EditableField::Title => Self::title(value),
            EditableField::Description => Ok(Self::Description(value.to_string())),
        }
    }

    /// Builds an update from an untyped column name and stored value.
    ///
    /// `priority` only accepts one of the level icons, or an empty string to
    /// clear it. Difficulty words are translated by the workflows, not here.
    pub fn parse(column: &str, value: &str) -> Result<Self, TaskError> {
        let invalid = |field: TaskField| TaskError::InvalidValue {
            field: field.column().to_string(),
            value: value.to_string(),
        };

        match column.parse::<TaskField>()? {
            TaskField::Title => Self::title(value),
            TaskField::Description => Ok(Self::Description(value.to_string())),
            TaskField::Completed => match value.trim() {
                "1" | "true" => Ok(Self::Completed(true)),
                "0" | "false" => Ok(Self::Completed(false)),
                _ => Err(invalid(TaskField::Completed)),
            },
            TaskField::Priority => match value.trim() {
                "" => Ok(Self::Priority(None)),
                icon => Priority::from_icon(icon)
                    .map(|p| Self::Priority(Some(p)))
                    .ok_or_else(|| invalid(TaskField::Priority)),
            },
        }
    }

    pub fn field(&self) -> TaskField {
        match self {
            Self::Title(_) => TaskField::Title,
            Self::Description(_) => TaskField::Description,
            Self::Completed(_) => TaskField::Completed,
            Self::Priority(_) => TaskField::Priority,
        }
    }

    /// Applies the change to a snapshot.
    pub fn apply(&self, task: &mut Task) {
        match self {
            Self::Title(title) => task.title = title.clone(),
            Self::Description(description) => task.description = description.clone(),
            Self::Completed(completed) => task.completed = *completed,
            Self::Priority(priority) => task.priority = *priority,
        }
    }
}

/// Parses a task id typed by the user. Only positive integers are accepted.
pub fn parse_task_id(input: &str) -> Result<i64, TaskError> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(id) if id > 0 && input.chars().all(|c| c.is_ascii_digit()) => Ok(id),
        _ => Err(TaskError::InvalidSelection(input.to_string())),
    }
}

