//! Thread-safe handle to a [`TaskStore`].
//!
//! The lock is held across the whole mutate-then-save sequence, so two
//! concurrent mutations can never interleave and leave storage holding a list
//! that neither of them produced.

use std::sync::Arc;

use parking_lot::Mutex;
use studyplan_model::task::Task;

use super::{MarkOutcome, TaskStore};
use crate::report::ProductivityReport;
use crate::storage::{StoreError, TaskStorage};

/// Cloneable, lock-protected task store.
pub struct SharedTaskStore<S> {
    inner: Arc<Mutex<TaskStore<S>>>,
}

impl<S> Clone for SharedTaskStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TaskStorage> SharedTaskStore<S> {
    #[must_use]
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`TaskStore::add_task`].
    ///
    /// # Errors
    ///
    /// Same as [`TaskStore::add_task`].
    pub fn add_task(&self, task: Task) -> Result<(), StoreError> {
        self.inner.lock().add_task(task)
    }

    /// See [`TaskStore::mark_task_done`].
    ///
    /// # Errors
    ///
    /// Same as [`TaskStore::mark_task_done`].
    pub fn mark_task_done(&self, index: usize) -> Result<MarkOutcome, StoreError> {
        self.inner.lock().mark_task_done(index)
    }

    /// See [`TaskStore::save`].
    ///
    /// # Errors
    ///
    /// Same as [`TaskStore::save`].
    pub fn save(&self) -> Result<(), StoreError> {
        self.inner.lock().save()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.inner.lock().snapshot()
    }

    #[must_use]
    pub fn report(&self) -> ProductivityReport {
        self.inner.lock().report()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with shared access to the underlying store.
    pub fn with_store<R>(&self, f: impl FnOnce(&TaskStore<S>) -> R) -> R {
        let store = self.inner.lock();
        f(&*store)
    }
}
