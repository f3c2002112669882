use super::with_tasks;
use crate::libs::stats;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    with_tasks(|tasks| {
        stats::print(&stats::compute(tasks)?);
        Ok(())
    })
}
