//! Plain-text dashboard listing every task and the productivity score.

use std::fmt::Write;

use studyplan_model::task::{Task, TaskStatus};

use crate::report::ProductivityReport;

const RULE: &str = "=========================================";
const SEPARATOR: &str = "-----------------------------------------";
const TITLE: &str = "          MY PRODUCTIVITY DASHBOARD      ";

/// Status column for a task, padded to a fixed width.
#[must_use]
pub const fn status_label(task: &Task) -> &'static str {
    match task.status() {
        TaskStatus::Done => "[DONE]   ",
        TaskStatus::Pending => "[PENDING]",
    }
}

/// Formats one numbered task line. `position` is 1-based.
#[must_use]
pub fn task_line(position: usize, task: &Task) -> String {
    format!("{position}. {} {task}", status_label(task))
}

/// Renders the full dashboard for `tasks`.
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{RULE}");
    out.push('\n');
    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(out, "{}", task_line(i + 1, task));
    }
    out.push('\n');
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "{}", ProductivityReport::from_tasks(tasks));
    out
}
