//! Durable storage for the task list.
//!
//! Defines the [`TaskStorage`] trait used by the task store to persist the
//! whole list on every mutation, plus two implementations:
//! - [`FileStorage`]: a single data file on disk
//! - [`MemoryStorage`]: in-process bytes, for tests and embedding

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use studyplan_model::codec::CodecError;
use studyplan_model::task::Task;

/// Errors that can occur while reading or writing the task list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data file could not be read or written.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The storage backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The persisted bytes could not be encoded or decoded.
    #[error("corrupt task data: {0}")]
    Codec(#[from] CodecError),
}

/// Whole-list persistence backend.
///
/// Implementations always replace the full list on [`save`](Self::save);
/// there are no partial writes.
pub trait TaskStorage {
    /// Reads the persisted list.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the data exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError>;

    /// Overwrites the persisted list with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the list cannot be encoded or written.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
