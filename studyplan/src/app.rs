//! Command dispatch for the `studyplan` CLI.
//!
//! Translates parsed [`Command`]s into task store calls, converting the
//! user's 1-based positions to store indices, and writes the resulting view.
//! Kept separate from `main` so the whole flow can be driven in tests.

use std::io::Write;

use studyplan_model::task::Task;

use crate::config::Command;
use crate::dashboard;
use crate::storage::{StoreError, TaskStorage};
use crate::tasks::{MarkOutcome, TaskStore};

/// Errors surfaced by a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The task list could not be saved (strict durability only).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// JSON output could not be produced.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs one command against `store`, writing user-facing text to `out`.
///
/// `None` shows the dashboard.
///
/// # Errors
///
/// Returns [`AppError`] if a strict-mode save fails or output cannot be written.
pub fn execute<S: TaskStorage>(
    store: &mut TaskStore<S>,
    command: Option<Command>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        None => write!(out, "{}", dashboard::render(store.tasks()))?,
        Some(Command::AddStudy { title, minutes }) => {
            store.add_task(Task::study(title, minutes))?;
            writeln!(out, "Added task {}.", store.len())?;
            write!(out, "{}", dashboard::render(store.tasks()))?;
        }
        Some(Command::AddDeadline { title, due }) => {
            store.add_task(Task::deadline(title, due))?;
            writeln!(out, "Added task {}.", store.len())?;
            write!(out, "{}", dashboard::render(store.tasks()))?;
        }
        Some(Command::Done { position }) => {
            let outcome = match position.checked_sub(1) {
                Some(index) => store.mark_task_done(index)?,
                None => MarkOutcome::OutOfRange,
            };
            match outcome {
                MarkOutcome::Completed => writeln!(out, "Task {position} marked done.")?,
                MarkOutcome::AlreadyComplete => {
                    writeln!(out, "Task {position} was already done.")?;
                }
                MarkOutcome::OutOfRange => writeln!(out, "No task #{position}.")?,
            }
            write!(out, "{}", dashboard::render(store.tasks()))?;
        }
        Some(Command::List { json: true }) => {
            serde_json::to_writer_pretty(&mut *out, store.tasks())?;
            writeln!(out)?;
        }
        Some(Command::List { json: false }) => {
            write!(out, "{}", dashboard::render(store.tasks()))?;
        }
        Some(Command::Report { json: true }) => {
            serde_json::to_writer_pretty(&mut *out, &store.report())?;
            writeln!(out)?;
        }
        Some(Command::Report { json: false }) => writeln!(out, "{}", store.report())?,
    }
    Ok(())
}
