use super::with_tasks;
use crate::libs::workflow::{TerminalPrompt, Workflow};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    with_tasks(|tasks| {
        Workflow::new(tasks, &mut TerminalPrompt).gamble_task(&mut rand::thread_rng())?;
        Ok(())
    })
}
