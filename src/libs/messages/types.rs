use crate::libs::task::{EditableField, Priority};

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(i64),
    TaskDeleted(i64),
    TaskFieldUpdated(i64, EditableField),
    TasksHeader,
    NoTasksYet,
    InvalidTaskNumber,
    ConfirmDeleteTask(i64, String),

    // === PRIORITY MESSAGES ===
    ChooseTaskForPriority,
    PrioritySet(Priority, i64),

    // === GAMBLE MESSAGES ===
    GambleAllCompleted,
    GambleDraw(String),
    GambleSelected(String),
    GambleCancelled,
    GambleInvalidDecision,

    // === SEARCH MESSAGES ===
    NoTasksWithPriority(Priority),
    PriorityTasksHeader(Priority),
    SelectTask,
    TaskSelected(String),
    NoTaskSelected,

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    StatsTotal(usize),
    StatsCompleted(usize, f64),
    StatsPending(usize, f64),
    StatsNoPriority(usize),
    StatsPriority(Priority, usize),

    // === MENU MESSAGES ===
    MenuTitle,
    Goodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskNumber,
    PromptTaskIdToComplete,
    PromptTaskIdToDelete,
    PromptDifficulty,
    PromptEditField,
    PromptNewValue(EditableField),
    PromptGambleDecision,
    PromptMenuChoice,
    PromptDatabasePath,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
