use super::task::Task;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table: status, id, title, priority and description.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["", "ID", "TITLE", "PRIORITY", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.status_icon(),
                task.id,
                task.title,
                task.priority_icon(),
                task.description
            ]);
        }
        table.printstd();
    }

    /// Prints the 1-based ordinal menu used when choosing a task.
    pub fn ordinals(tasks: &[Task]) {
        for (ordinal, task) in tasks.iter().enumerate() {
            println!("{}- [{}] {}", ordinal + 1, task.id, task.title);
        }
    }
}
