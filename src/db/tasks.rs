use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{Priority, Task, TaskFilter, TaskUpdate};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, warn};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description) VALUES (?1, ?2)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const UPDATE_TITLE: &str = "UPDATE tasks SET title = ?1 WHERE id = ?2";
const UPDATE_DESCRIPTION: &str = "UPDATE tasks SET description = ?1 WHERE id = ?2";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?1 WHERE id = ?2";
const UPDATE_PRIORITY: &str = "UPDATE tasks SET priority = ?1 WHERE id = ?2";
const SELECT_TASKS: &str = "SELECT id, title, description, completed, priority FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, completed, priority FROM tasks WHERE id = ?1";
const SELECT_EXISTS: &str = "SELECT 1 FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_WITHOUT_PRIORITY: &str = "SELECT COUNT(*) FROM tasks WHERE priority IS NULL OR priority NOT IN (?1, ?2, ?3)";
const WHERE_COMPLETED: &str = "WHERE completed = 1";
const WHERE_INCOMPLETE: &str = "WHERE COALESCE(completed, 0) = 0";
const WHERE_PRIORITY: &str = "WHERE priority = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

/// Task repository over an owned [`Db`] handle.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    /// Opens the configured database.
    pub fn new() -> Result<Tasks> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Tasks {
        Tasks { db }
    }

    /// Releases the underlying connection.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }

    /// Creates a task with a trimmed, non-empty title. The new task is
    /// incomplete and has no priority.
    pub fn insert(&mut self, title: &str, description: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle.into());
        }

        self.db.execute(INSERT_TASK, params![title, description])?;
        debug!(title, "task inserted");
        Ok(())
    }

    /// All tasks, ascending by id.
    pub fn list_all(&mut self) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let query = format!("{} {} {}", SELECT_TASKS, Self::where_clause(&filter), ORDER_BY_ID);
        let mut stmt = self.db.conn.prepare(&query)?;

        let task_iter = match filter {
            TaskFilter::ByPriority(priority) => stmt.query_map(params![priority], task_from_row)?,
            _ => stmt.query_map([], task_from_row)?,
        };

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        debug!(?filter, count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.db
            .conn
            .query_row(SELECT_TASK_BY_ID, params![id], task_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn exists(&mut self, id: i64) -> Result<bool> {
        let found = self
            .db
            .conn
            .query_row(SELECT_EXISTS, params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Deletes a task. An unknown id is a no-op and yields `0`.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.db.execute(DELETE_TASK, params![id])?;
        debug!(id, affected, "task deleted");
        Ok(affected)
    }

    /// Applies a single-column change. An unknown id is a no-op and yields `0`.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<usize> {
        let affected = match update {
            TaskUpdate::Title(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(TaskError::EmptyTitle.into());
                }
                self.db.execute(UPDATE_TITLE, params![title, id])?
            }
            TaskUpdate::Description(description) => self.db.execute(UPDATE_DESCRIPTION, params![description, id])?,
            TaskUpdate::Completed(completed) => self.db.execute(UPDATE_COMPLETED, params![completed, id])?,
            TaskUpdate::Priority(priority) => self.db.execute(UPDATE_PRIORITY, params![priority, id])?,
        };
        debug!(id, column = update.field().column(), affected, "task updated");
        Ok(affected)
    }

    /// String-keyed update for callers holding an untyped column name.
    ///
    /// Fails with [`TaskError::InvalidColumn`] outside of
    /// `title`, `description`, `completed` and `priority`.
    pub fn update_column(&mut self, id: i64, column: &str, value: &str) -> Result<usize> {
        let update = TaskUpdate::parse(column, value)?;
        self.update(id, &update)
    }

    pub fn complete(&mut self, id: i64) -> Result<usize> {
        self.update(id, &TaskUpdate::Completed(true))
    }

    pub fn count(&mut self, filter: TaskFilter) -> Result<usize> {
        let query = format!("{} {}", COUNT_TASKS, Self::where_clause(&filter));
        let count: i64 = match filter {
            TaskFilter::ByPriority(priority) => self.db.conn.query_row(&query, params![priority], |row| row.get(0))?,
            _ => self.db.conn.query_row(&query, [], |row| row.get(0))?,
        };
        Ok(count as usize)
    }

    pub fn count_without_priority(&mut self) -> Result<usize> {
        let [hard, medium, easy] = Priority::ALL;
        let count: i64 = self
            .db
            .conn
            .query_row(COUNT_WITHOUT_PRIORITY, params![hard, medium, easy], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn where_clause(filter: &TaskFilter) -> &'static str {
        match filter {
            TaskFilter::All => "",
            TaskFilter::Completed => WHERE_COMPLETED,
            TaskFilter::Incomplete => WHERE_INCOMPLETE,
            TaskFilter::ByPriority(_) => WHERE_PRIORITY,
        }
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get(0)?;
    let priority: Option<String> = row.get(4)?;
    let priority = match priority.as_deref() {
        None | Some("") => None,
        Some(icon) => {
            let parsed = Priority::from_icon(icon);
            if parsed.is_none() {
                warn!(id, value = icon, "unrecognized priority, reading task without one");
            }
            parsed
        }
    };

    Ok(Task {
        id,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get::<_, Option<bool>>(3)?.unwrap_or(false),
        priority,
    })
}
