//! Database layer for taskroll.
//!
//! A thin persistence layer on SQLite:
//!
//! - [`db::Db`] owns the connection and creates the schema on first use
//! - [`tasks::Tasks`] exposes typed task operations on top of it
//!
//! All statements bind their inputs as parameters; user text is never
//! spliced into SQL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskroll::db::{db::Db, tasks::Tasks};
//!
//! let mut tasks = Tasks::with_db(Db::open("taskroll.db")?);
//! tasks.insert("Review code", "Check PR #123")?;
//! for task in tasks.list_all()? {
//!     println!("[{}] {}", task.id, task.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection ownership and schema bootstrap.
pub mod db;

/// Task CRUD, filtering and counting.
pub mod tasks;
