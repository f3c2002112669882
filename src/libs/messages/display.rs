//! Display implementation for taskroll messages.
//!
//! All user-facing text is defined here, in one place, so the command
//! handlers and workflows only deal with structured [`Message`] values.
//! Status prefixes (✅, ❌, ℹ️) are added by the `msg_*` macros, not here.

use super::types::Message;
use crate::libs::task::Priority;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task added: {}", title),
            Message::TaskCompleted(id) => format!("Task {} marked as completed!", id),
            Message::TaskDeleted(id) => format!("🗑️ Task {} deleted!", id),
            Message::TaskFieldUpdated(id, field) => format!("Task {} {} updated.", id, field),
            Message::TasksHeader => "📋 Your Tasks:".to_string(),
            Message::NoTasksYet => "📋 No tasks yet!".to_string(),
            Message::InvalidTaskNumber => "Please enter a valid number!".to_string(),
            Message::ConfirmDeleteTask(id, title) => format!("Delete task {} \"{}\"? This cannot be undone", id, title),

            // === PRIORITY MESSAGES ===
            Message::ChooseTaskForPriority => "Which task do you want to add a priority for?".to_string(),
            Message::PrioritySet(priority, id) => format!("Priority {} set for task {}.", priority.icon(), id),

            // === GAMBLE MESSAGES ===
            Message::GambleAllCompleted => "🎉 All tasks are completed! Nothing to gamble.".to_string(),
            Message::GambleDraw(title) => format!("🎲 You got: {}", title),
            Message::GambleSelected(title) => format!("Selected: {}", title),
            Message::GambleCancelled => "Gamble canceled.".to_string(),
            Message::GambleInvalidDecision => "Invalid choice. Type: yes, no, or cancel.".to_string(),

            // === SEARCH MESSAGES ===
            Message::NoTasksWithPriority(priority) => format!("📋 No {} tasks found!", priority),
            Message::PriorityTasksHeader(priority) => {
                format!("{} {} Tasks:", priority.icon(), priority.as_str().to_uppercase())
            }
            Message::SelectTask => "Select a task:".to_string(),
            Message::TaskSelected(title) => format!("You selected: {}", title),
            Message::NoTaskSelected => "No task selected.".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "=== STATISTICS ===".to_string(),
            Message::StatsTotal(total) => format!("Total Tasks: {}", total),
            Message::StatsCompleted(count, pct) => format!("Completed: {} ({:.1}%)", count, pct),
            Message::StatsPending(count, pct) => format!("Pending: {} ({:.1}%)", count, pct),
            Message::StatsNoPriority(count) => format!("⚪ No Priority: {} tasks", count),
            Message::StatsPriority(priority, count) => {
                let label = match priority {
                    Priority::Hard => "Hard",
                    Priority::Medium => "Medium",
                    Priority::Easy => "Easy",
                };
                format!("{} {}: {} tasks", priority.icon(), label, count)
            }

            // === MENU MESSAGES ===
            Message::MenuTitle => "=== TODO APP ===".to_string(),
            Message::Goodbye => "👋 Goodbye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskNumber => "Enter the number".to_string(),
            Message::PromptTaskIdToComplete => "Enter task ID to complete".to_string(),
            Message::PromptTaskIdToDelete => "Enter task ID to delete".to_string(),
            Message::PromptDifficulty => "Difficulty (hard, medium, easy)".to_string(),
            Message::PromptEditField => "What to change (title or description)".to_string(),
            Message::PromptNewValue(field) => format!("Enter new {}", field),
            Message::PromptGambleDecision => "Accept this task? (yes / no / cancel)".to_string(),
            Message::PromptMenuChoice => "Choose option".to_string(),
            Message::PromptDatabasePath => "Enter the database file path".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
