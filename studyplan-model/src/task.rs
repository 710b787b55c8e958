//! Task types for `studyplan`.
//!
//! A [`Task`] is either a timed study session or a dated deadline. The kind
//! and its attribute are fixed at construction; the only mutable state is the
//! one-way completion flag.

use serde::{Deserialize, Serialize};

/// What kind of work a task represents, with its kind-specific attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// A study session with an estimated duration.
    Study {
        /// Estimated duration in minutes. Callers supply a positive value.
        minutes: u32,
    },
    /// A dated deliverable. The date is free text and never parsed.
    Deadline {
        /// Due date as entered by the user.
        due_date: String,
    },
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not yet done.
    Pending,
    /// Marked done. Terminal.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A single unit of tracked work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    title: String,
    kind: TaskKind,
    complete: bool,
}

impl Task {
    /// Creates a pending study task.
    #[must_use]
    pub fn study(title: impl Into<String>, minutes: u32) -> Self {
        Self::new(title, TaskKind::Study { minutes })
    }

    /// Creates a pending deadline task.
    #[must_use]
    pub fn deadline(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::new(
            title,
            TaskKind::Deadline {
                due_date: due_date.into(),
            },
        )
    }

    /// Creates a pending task of the given kind.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            title: title.into(),
            kind,
            complete: false,
        }
    }

    /// Marks the task done. Calling this again has no further effect.
    pub const fn mark_done(&mut self) {
        self.complete = true;
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.complete {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Human-readable label, e.g. `Study: Algebra (45 mins)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TaskKind::Study { minutes } => write!(f, "Study: {} ({minutes} mins)", self.title),
            TaskKind::Deadline { due_date } => {
                write!(f, "Deadline: {} (Due: {due_date})", self.title)
            }
        }
    }
}
