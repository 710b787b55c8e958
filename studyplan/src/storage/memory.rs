//! In-process task storage.
//!
//! Holds the encoded bytes rather than the `Vec<Task>` itself so the same
//! codec path as [`FileStorage`](super::FileStorage) is exercised. Clones share
//! state, which lets a test reopen a store on "the same disk".

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use studyplan_model::codec;
use studyplan_model::task::Task;

use super::{StoreError, TaskStorage};

#[derive(Debug, Default)]
struct Inner {
    bytes: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
    failing: AtomicBool,
}

/// Shared in-memory storage with failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Inner>,
}

impl MemoryStorage {
    /// Creates empty storage (nothing persisted yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-loaded with raw bytes, valid or not.
    #[must_use]
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        let storage = Self::new();
        *storage.inner.bytes.lock() = Some(bytes);
        storage
    }

    /// Makes subsequent loads and saves fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, fail: bool) {
        self.inner.failing.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the currently persisted bytes.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.inner.bytes.lock().clone()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.inner.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("storage marked as failing".to_string()))
        } else {
            Ok(())
        }
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        self.check_available()?;
        match self.inner.bytes.lock().as_deref() {
            Some(bytes) => Ok(Some(codec::decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        self.check_available()?;
        let bytes = codec::encode(tasks)?;
        *self.inner.bytes.lock() = Some(bytes);
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
