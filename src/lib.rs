//! # Taskroll - a SQLite-backed task tracker
//!
//! A command-line utility for capturing tasks, grading them by difficulty,
//! and letting chance pick the next one to work on.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, edit, complete and delete tasks
//! - **Priorities**: Grade tasks as hard 🔴, medium 🟡 or easy 🟢
//! - **Gamble Mode**: Draw random incomplete tasks until one is accepted
//! - **Search**: Pick a task among those sharing a priority level
//! - **Statistics**: Completion percentages and per-priority counts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskroll::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
