//! Productivity score derived from the current task list.

use serde::Serialize;
use studyplan_model::task::Task;

/// Score band a non-empty task list falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    /// Every task is done.
    Excellent,
    /// At least half of the tasks are done.
    Good,
    /// Fewer than half of the tasks are done.
    FallingBehind,
}

impl Tier {
    /// Picks the tier for a percentage in `0..=100`.
    #[must_use]
    pub const fn for_percentage(percentage: u8) -> Self {
        if percentage == 100 {
            Self::Excellent
        } else if percentage >= 50 {
            Self::Good
        } else {
            Self::FallingBehind
        }
    }

    /// Comment shown next to the score.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You crushed it.",
            Self::Good => "Good job, keep going!",
            Self::FallingBehind => "You are falling behind!",
        }
    }
}

/// Completion summary for a task list.
///
/// `tier` is `None` only when there are no tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductivityReport {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: Option<Tier>,
}

impl ProductivityReport {
    /// Computes the report. The percentage is truncated, never rounded.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_complete()).count();
        if total == 0 {
            return Self {
                completed,
                total,
                percentage: 0,
                tier: None,
            };
        }
        // completed <= total, so the quotient is at most 100.
        let percentage = u8::try_from(completed * 100 / total).unwrap_or(100);
        Self {
            completed,
            total,
            percentage,
            tier: Some(Tier::for_percentage(percentage)),
        }
    }
}

impl std::fmt::Display for ProductivityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tier {
            None => write!(f, "PRODUCTIVITY SCORE: 0% (No tasks)"),
            Some(tier) => write!(
                f,
                "PRODUCTIVITY SCORE: {}% | {}",
                self.percentage,
                tier.comment()
            ),
        }
    }
}
