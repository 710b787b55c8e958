//! File-backed task storage.

use std::path::{Path, PathBuf};

use studyplan_model::codec;
use studyplan_model::task::Task;

use super::{StoreError, TaskStorage};

/// Stores the task list in a single file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage backed by the file at `path`.
    ///
    /// The file does not need to exist; it is created on first save along
    /// with any missing parent directories.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TaskStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        Ok(Some(codec::decode(&bytes)?))
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let bytes = codec::encode(tasks)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), tasks = tasks.len(), "task list written");
        Ok(())
    }
}
