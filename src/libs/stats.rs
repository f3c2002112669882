//! Completion statistics over the task store.
//!
//! Counts come straight from `COUNT(*)` queries. Percentages are only
//! computed when at least one task exists; an empty store yields
//! [`Summary::NoTasks`] instead.

use super::messages::Message;
use super::task::{Priority, TaskFilter};
use crate::db::tasks::Tasks;
use crate::msg_print;
use anyhow::Result;

/// Aggregate counts for a non-empty store.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub completed_pct: f64,
    pub pending: usize,
    /// Always `100 - completed_pct`, so both percentages add up to 100.
    pub pending_pct: f64,
    pub no_priority: usize,
    pub hard: usize,
    pub medium: usize,
    pub easy: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    NoTasks,
    Report(Statistics),
}

impl Statistics {
    pub fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::Hard => self.hard,
            Priority::Medium => self.medium,
            Priority::Easy => self.easy,
        }
    }
}

pub fn compute(tasks: &mut Tasks) -> Result<Summary> {
    let total = tasks.count(TaskFilter::All)?;
    if total == 0 {
        return Ok(Summary::NoTasks);
    }

    let completed = tasks.count(TaskFilter::Completed)?;
    let completed_pct = completed as f64 * 100.0 / total as f64;

    Ok(Summary::Report(Statistics {
        total,
        completed,
        completed_pct,
        pending: total - completed,
        pending_pct: 100.0 - completed_pct,
        no_priority: tasks.count_without_priority()?,
        hard: tasks.count(TaskFilter::ByPriority(Priority::Hard))?,
        medium: tasks.count(TaskFilter::ByPriority(Priority::Medium))?,
        easy: tasks.count(TaskFilter::ByPriority(Priority::Easy))?,
    }))
}

/// Prints a summary. The no-priority line is omitted when the count is zero.
pub fn print(summary: &Summary) {
    let stats = match summary {
        Summary::NoTasks => {
            msg_print!(Message::NoTasksYet);
            return;
        }
        Summary::Report(stats) => stats,
    };

    msg_print!(Message::StatisticsHeader, true);
    msg_print!(Message::StatsTotal(stats.total));
    msg_print!(Message::StatsCompleted(stats.completed, stats.completed_pct));
    msg_print!(Message::StatsPending(stats.pending, stats.pending_pct));
    println!();

    if stats.no_priority > 0 {
        msg_print!(Message::StatsNoPriority(stats.no_priority));
    }
    for priority in Priority::ALL {
        msg_print!(Message::StatsPriority(priority, stats.count_for(priority)));
    }
}
