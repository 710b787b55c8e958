//! The task store: an ordered task list kept in sync with durable storage.
//!
//! Every mutation is written through to a [`TaskStorage`](crate::storage::TaskStorage)
//! backend before returning. Whether a failed write is surfaced to the caller
//! is governed by [`DurabilityPolicy`].

pub mod shared;
pub mod store;

pub use shared::SharedTaskStore;
pub use store::TaskStore;

/// How mutations react when the write-through save fails.
///
/// In both modes the in-memory change is kept; storage is never rolled
/// back into memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DurabilityPolicy {
    /// Log the failure and report success to the caller.
    #[default]
    BestEffort,
    /// Return the storage error from the mutating call.
    Strict,
}

/// Result of asking the store to complete a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The task was pending and is now done.
    Completed,
    /// The task was already done; nothing changed.
    AlreadyComplete,
    /// No task exists at that index; nothing was changed or written.
    OutOfRange,
}
