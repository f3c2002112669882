use super::task;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        stats,
        workflow::{Prompt, TerminalPrompt, Workflow},
    },
    msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    View,
    Complete,
    Delete,
    Priority,
    Edit,
    Gamble,
    Statistics,
    Search,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 10] = [
        MenuAction::Add,
        MenuAction::View,
        MenuAction::Complete,
        MenuAction::Delete,
        MenuAction::Priority,
        MenuAction::Edit,
        MenuAction::Gamble,
        MenuAction::Statistics,
        MenuAction::Search,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Add => "1. Add task",
            Self::View => "2. View tasks",
            Self::Complete => "3. Complete task",
            Self::Delete => "4. Delete task",
            Self::Priority => "5. Add priority to task",
            Self::Edit => "6. Edit task",
            Self::Gamble => "7. Gamble a task",
            Self::Statistics => "8. View statistics",
            Self::Search => "9. Search tasks by priority",
            Self::Exit => "10. Exit",
        };
        write!(f, "{}", label)
    }
}

/// Runs the interactive menu until the user exits. The store is closed on
/// every exit path, including errors raised inside the loop.
pub fn cmd() -> Result<()> {
    let mut tasks = Tasks::new()?;
    let result = run(&mut tasks, &mut TerminalPrompt);
    let closed = tasks.close();
    result?;
    closed
}

fn run<P: Prompt>(tasks: &mut Tasks, prompt: &mut P) -> Result<()> {
    loop {
        msg_print!(Message::MenuTitle, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&MenuAction::ALL)
            .default(0)
            .interact()?;

        match MenuAction::ALL.get(selection).copied().unwrap_or(MenuAction::Exit) {
            MenuAction::Add => {
                let title = prompt.ask(&Message::PromptTaskTitle.to_string())?;
                let description = prompt.ask(&Message::PromptTaskDescription.to_string())?;
                task::add(tasks, &title, description.trim())?;
            }
            MenuAction::View => task::list(tasks)?,
            MenuAction::Complete => {
                task::list(tasks)?;
                let input = prompt.ask(&Message::PromptTaskIdToComplete.to_string())?;
                task::complete(tasks, &input)?;
            }
            MenuAction::Delete => {
                task::list(tasks)?;
                let input = prompt.ask(&Message::PromptTaskIdToDelete.to_string())?;
                task::delete(tasks, &input, false)?;
            }
            MenuAction::Priority => {
                Workflow::new(tasks, prompt).set_priority()?;
            }
            MenuAction::Edit => {
                Workflow::new(tasks, prompt).edit_task()?;
            }
            MenuAction::Gamble => {
                Workflow::new(tasks, prompt).gamble_task(&mut rand::thread_rng())?;
            }
            MenuAction::Statistics => stats::print(&stats::compute(tasks)?),
            MenuAction::Search => {
                Workflow::new(tasks, prompt).search_by_priority()?;
            }
            MenuAction::Exit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}
