use super::with_tasks;
use crate::{
    db::tasks::Tasks,
    libs::{
        error::TaskError,
        messages::Message,
        task::parse_task_id,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Optional description
    #[arg(short, long, default_value = "")]
    description: String,
}

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID
    id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add_cmd(args: AddArgs) -> Result<()> {
    with_tasks(|tasks| add(tasks, &args.title, args.description.trim()))
}

pub fn complete_cmd(args: CompleteArgs) -> Result<()> {
    with_tasks(|tasks| complete(tasks, &args.id))
}

pub fn delete_cmd(args: DeleteArgs) -> Result<()> {
    with_tasks(|tasks| delete(tasks, &args.id, args.yes))
}

/// Reports validation errors to the user and swallows them. Anything else
/// is passed through.
fn report(err: anyhow::Error) -> Result<()> {
    if let Some(task_err) = err.downcast_ref::<TaskError>().filter(|e| e.is_validation()) {
        msg_error!(task_err);
        return Ok(());
    }
    Err(err)
}

pub fn add(tasks: &mut Tasks, title: &str, description: &str) -> Result<()> {
    match tasks.insert(title, description) {
        Ok(()) => {
            msg_success!(Message::TaskAdded(title.trim().to_string()));
            Ok(())
        }
        Err(err) => report(err),
    }
}

pub fn list(tasks: &mut Tasks) -> Result<()> {
    let all = tasks.list_all()?;
    if all.is_empty() {
        msg_print!(Message::NoTasksYet);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&all);
    Ok(())
}

/// Parses a typed id and checks that the task exists, reporting either
/// failure. Returns `None` when the caller should stop.
pub fn resolve_id(tasks: &mut Tasks, input: &str) -> Result<Option<i64>> {
    let id = match parse_task_id(input) {
        Ok(id) => id,
        Err(_) => {
            msg_error!(Message::InvalidTaskNumber);
            return Ok(None);
        }
    };

    if !tasks.exists(id)? {
        msg_error!(TaskError::NotFound(id));
        return Ok(None);
    }
    Ok(Some(id))
}

pub fn complete(tasks: &mut Tasks, input: &str) -> Result<()> {
    let Some(id) = resolve_id(tasks, input)? else {
        return Ok(());
    };

    tasks.complete(id)?;
    msg_success!(Message::TaskCompleted(id));
    Ok(())
}

pub fn delete(tasks: &mut Tasks, input: &str, skip_confirm: bool) -> Result<()> {
    let Some(id) = resolve_id(tasks, input)? else {
        return Ok(());
    };

    if !skip_confirm {
        let Some(task) = tasks.get_by_id(id)? else {
            msg_error!(TaskError::NotFound(id));
            return Ok(());
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.id, task.title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
