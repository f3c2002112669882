pub mod edit;
pub mod gamble;
pub mod init;
pub mod menu;
pub mod priority;
pub mod search;
pub mod stats;
pub mod task;

use crate::db::tasks::Tasks;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database location")]
    Init,
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Mark a task as completed")]
    Complete(task::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Set the priority of a task")]
    Priority,
    #[command(about = "Edit the title or description of a task")]
    Edit,
    #[command(about = "Let chance pick an incomplete task")]
    Gamble,
    #[command(about = "Show completion statistics")]
    Stats,
    #[command(about = "Search tasks by priority")]
    Search,
}

/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            None => menu::cmd(),
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Add(args)) => task::add_cmd(args),
            Some(Commands::List) => with_tasks(task::list),
            Some(Commands::Complete(args)) => task::complete_cmd(args),
            Some(Commands::Delete(args)) => task::delete_cmd(args),
            Some(Commands::Priority) => priority::cmd(),
            Some(Commands::Edit) => edit::cmd(),
            Some(Commands::Gamble) => gamble::cmd(),
            Some(Commands::Stats) => stats::cmd(),
            Some(Commands::Search) => search::cmd(),
        }
    }
}

/// Opens the task store, runs `f`, and closes the store whether or not
/// `f` succeeded.
pub(crate) fn with_tasks<T>(f: impl FnOnce(&mut Tasks) -> Result<T>) -> Result<T> {
    let mut tasks = Tasks::new()?;
    let result = f(&mut tasks);
    let closed = tasks.close();
    let value = result?;
    closed?;
    Ok(value)
}
