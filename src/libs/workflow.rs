//! Interactive task workflows.
//!
//! Each workflow reads a fresh snapshot of the store, asks the user for
//! input through a [`Prompt`], validates the answer and only then touches
//! the repository. Invalid input is reported once, at the step that
//! rejects it, and comes back as [`Outcome::Rejected`] with nothing
//! written. Storage errors propagate as `Err`.
//!
//! ## Workflows
//!
//! - **`choose_task`**: pick one task from a 1-based ordinal menu
//! - **`set_priority`**: grade a task as hard, medium or easy
//! - **`edit_task`**: change the title or description of a task
//! - **`gamble_task`**: draw random incomplete tasks until one is accepted
//! - **`search_by_priority`**: pick a task among those with a given level

use super::error::TaskError;
use super::messages::Message;
use super::task::{EditableField, Priority, Task, TaskFilter, TaskUpdate};
use super::view::View;
use crate::db::tasks::Tasks;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use rand::Rng;
use std::str::FromStr;
use tracing::debug;

/// Source of user answers.
pub trait Prompt {
    /// Asks `question` and returns the raw line typed by the user.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// How a workflow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The workflow ran to completion with this result.
    Selected(T),
    /// Nothing to operate on (empty store, no matches, nothing pending).
    Empty,
    /// The user's input was invalid; nothing was written.
    Rejected(TaskError),
    /// The user backed out.
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn selected(self) -> Option<T> {
        match self {
            Self::Selected(value) => Some(value),
            _ => None,
        }
    }
}

fn reject<T>(err: TaskError) -> Outcome<T> {
    msg_error!(err);
    Outcome::Rejected(err)
}

/// Answer to a gamble draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GambleDecision {
    Accept,
    Reject,
    Cancel,
}

impl FromStr for GambleDecision {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accept" | "yes" | "y" => Ok(Self::Accept),
            "reject" | "no" | "n" => Ok(Self::Reject),
            "cancel" | "c" => Ok(Self::Cancel),
            other => Err(TaskError::InvalidSelection(other.to_string())),
        }
    }
}

/// Resolves a 1-based ordinal typed by the user against `tasks`.
pub fn select_ordinal<'t>(tasks: &'t [Task], input: &str) -> Result<&'t Task, TaskError> {
    let input = input.trim();
    input
        .parse::<usize>()
        .ok()
        .filter(|ordinal| *ordinal >= 1)
        .and_then(|ordinal| tasks.get(ordinal - 1))
        .ok_or_else(|| TaskError::InvalidSelection(input.to_string()))
}

pub struct Workflow<'a, P: Prompt> {
    tasks: &'a mut Tasks,
    prompt: &'a mut P,
}

impl<'a, P: Prompt> Workflow<'a, P> {
    pub fn new(tasks: &'a mut Tasks, prompt: &'a mut P) -> Self {
        Self { tasks, prompt }
    }

    fn ask(&mut self, question: Message) -> Result<String> {
        self.prompt.ask(&question.to_string())
    }

    /// Shows `tasks` as an ordinal menu and reads one choice.
    pub fn choose_task(&mut self, tasks: &[Task]) -> Result<Outcome<Task>> {
        if tasks.is_empty() {
            msg_print!(Message::NoTasksYet);
            return Ok(Outcome::Empty);
        }

        View::ordinals(tasks);
        let answer = self.ask(Message::PromptTaskNumber)?;
        match select_ordinal(tasks, &answer) {
            Ok(task) => {
                debug!(id = task.id, "task chosen");
                Ok(Outcome::Selected(task.clone()))
            }
            Err(err) => Ok(reject(err)),
        }
    }

    /// Grades a chosen task. Returns the updated snapshot.
    pub fn set_priority(&mut self) -> Result<Outcome<Task>> {
        let all = self.tasks.list_all()?;
        if all.is_empty() {
            msg_print!(Message::NoTasksYet);
            return Ok(Outcome::Empty);
        }

        msg_print!(Message::ChooseTaskForPriority);
        let mut task = match self.choose_task(&all)? {
            Outcome::Selected(task) => task,
            other => return Ok(other),
        };

        let answer = self.ask(Message::PromptDifficulty)?;
        let priority = match answer.parse::<Priority>() {
            Ok(priority) => priority,
            Err(err) => return Ok(reject(err)),
        };

        let update = TaskUpdate::Priority(Some(priority));
        self.tasks.update(task.id, &update)?;
        update.apply(&mut task);

        msg_success!(Message::PrioritySet(priority, task.id));
        Ok(Outcome::Selected(task))
    }

    /// Changes the title or description of a chosen task. Returns the
    /// updated snapshot.
    pub fn edit_task(&mut self) -> Result<Outcome<Task>> {
        let all = self.tasks.list_all()?;
        if all.is_empty() {
            msg_print!(Message::NoTasksYet);
            return Ok(Outcome::Empty);
        }

        let mut task = match self.choose_task(&all)? {
            Outcome::Selected(task) => task,
            other => return Ok(other),
        };

        let answer = self.ask(Message::PromptEditField)?;
        let field = match answer.parse::<EditableField>() {
            Ok(field) => field,
            Err(err) => return Ok(reject(err)),
        };

        let value = self.ask(Message::PromptNewValue(field))?;
        let update = match TaskUpdate::edit(field, value.trim_end()) {
            Ok(update) => update,
            Err(err) => return Ok(reject(err)),
        };

        self.tasks.update(task.id, &update)?;
        update.apply(&mut task);

        msg_success!(Message::TaskFieldUpdated(task.id, field));
        Ok(Outcome::Selected(task))
    }

    /// Proposes random incomplete tasks until one is accepted or the user
    /// cancels. Every draw is independent, so a rejected task may come back.
    /// Unrecognized answers re-ask without drawing again.
    pub fn gamble_task<R: Rng>(&mut self, rng: &mut R) -> Result<Outcome<Task>> {
        if self.tasks.count(TaskFilter::All)? == 0 {
            msg_print!(Message::NoTasksYet);
            return Ok(Outcome::Empty);
        }

        let incomplete = self.tasks.fetch(TaskFilter::Incomplete)?;
        if incomplete.is_empty() {
            msg_print!(Message::GambleAllCompleted);
            return Ok(Outcome::Empty);
        }

        loop {
            let task = &incomplete[rng.gen_range(0..incomplete.len())];
            debug!(id = task.id, "gamble draw");
            msg_print!(Message::GambleDraw(task.title.clone()), true);

            loop {
                let answer = self.ask(Message::PromptGambleDecision)?;
                match answer.parse::<GambleDecision>() {
                    Ok(GambleDecision::Accept) => {
                        msg_success!(Message::GambleSelected(task.title.clone()));
                        return Ok(Outcome::Selected(task.clone()));
                    }
                    Ok(GambleDecision::Reject) => break,
                    Ok(GambleDecision::Cancel) => {
                        msg_info!(Message::GambleCancelled);
                        return Ok(Outcome::Cancelled);
                    }
                    Err(_) => msg_warning!(Message::GambleInvalidDecision),
                }
            }
        }
    }

    /// Lists tasks with the requested level and lets the user pick one of
    /// them.
    pub fn search_by_priority(&mut self) -> Result<Outcome<Task>> {
        let answer = self.ask(Message::PromptDifficulty)?;
        let priority = match answer.parse::<Priority>() {
            Ok(priority) => priority,
            Err(err) => return Ok(reject(err)),
        };

        let matches = self.tasks.fetch(TaskFilter::ByPriority(priority))?;
        if matches.is_empty() {
            msg_print!(Message::NoTasksWithPriority(priority));
            return Ok(Outcome::Empty);
        }

        msg_print!(Message::PriorityTasksHeader(priority), true);
        View::tasks(&matches);

        msg_print!(Message::SelectTask, true);
        let outcome = self.choose_task(&matches)?;
        match &outcome {
            Outcome::Selected(task) => msg_success!(Message::TaskSelected(task.title.clone())),
            _ => msg_info!(Message::NoTaskSelected),
        }
        Ok(outcome)
    }
}
