use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{Connection, Params};
use std::path::Path;
use tracing::{debug, info};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER DEFAULT 0,
    priority TEXT
)";

/// Owner of the single SQLite connection.
///
/// The connection runs in autocommit mode: every statement is durable once
/// [`Db::execute`] returns.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the configured location.
    pub fn new() -> Result<Db> {
        let db_file_path = Config::read()?.db_path()?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "database opened");

        let db = Db { conn };
        db.initialize()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        info!("in-memory database opened");

        let db = Db { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Creates the `tasks` table when it does not exist yet.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute(SCHEMA_TASKS, [])?;
        Ok(())
    }

    /// Runs a parameterized statement and returns the affected row count.
    pub fn execute<P: Params>(&self, statement: &str, params: P) -> Result<usize> {
        let affected = self.conn.execute(statement, params)?;
        debug!(statement, affected, "statement executed");
        Ok(affected)
    }

    /// Releases the connection, reporting any error from SQLite.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err)?;
        info!("database closed");
        Ok(())
    }
}
