//! Core library modules for taskroll.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, logging, messaging
//! - **Task Model**: Tasks, priority levels and typed field updates
//! - **Workflows**: Interactive priority, edit, gamble and search flows
//! - **Statistics**: Completion and priority aggregates
//! - **User Interface**: Table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskroll::db::tasks::Tasks;
//! use taskroll::libs::workflow::{TerminalPrompt, Workflow};
//!
//! let mut tasks = Tasks::new()?;
//! let mut prompt = TerminalPrompt;
//! Workflow::new(&mut tasks, &mut prompt).set_priority()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod stats;
pub mod task;
pub mod view;
pub mod workflow;
