//! Ordered task list with write-through persistence.

use studyplan_model::task::Task;

use super::{DurabilityPolicy, MarkOutcome};
use crate::report::ProductivityReport;
use crate::storage::{StoreError, TaskStorage};

/// Owns the task list for one process run.
///
/// Insertion order is display order and persistence order. The list is only
/// reachable through shared borrows, so it cannot be changed without going
/// through a method that also saves it.
pub struct TaskStore<S> {
    tasks: Vec<Task>,
    storage: S,
    policy: DurabilityPolicy,
    /// Message of the most recent failed load or save, cleared on success.
    last_error: Option<String>,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Opens a store on `storage`, loading whatever was persisted before.
    ///
    /// Missing or unreadable data yields an empty list; the failure is
    /// logged and available from [`last_persist_error`](Self::last_persist_error).
    pub fn open(storage: S, policy: DurabilityPolicy) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            storage,
            policy,
            last_error: None,
        };
        // Failure is already logged and recorded; an empty list is the fallback.
        let _ = store.load();
        store
    }

    /// Appends a task and saves the whole list.
    ///
    /// # Errors
    ///
    /// Under [`DurabilityPolicy::Strict`], returns the save error. The task
    /// stays in memory either way.
    pub fn add_task(&mut self, task: Task) -> Result<(), StoreError> {
        tracing::info!(task = %task, position = self.tasks.len() + 1, "adding task");
        self.tasks.push(task);
        self.persist()
    }

    /// Marks the task at zero-based `index` done and saves the whole list.
    ///
    /// An out-of-range index is a no-op: nothing is mutated or written.
    ///
    /// # Errors
    ///
    /// Under [`DurabilityPolicy::Strict`], returns the save error. The task
    /// stays marked in memory either way.
    pub fn mark_task_done(&mut self, index: usize) -> Result<MarkOutcome, StoreError> {
        let Some(task) = self.tasks.get_mut(index) else {
            tracing::debug!(index, len = self.tasks.len(), "mark done ignored: out of range");
            return Ok(MarkOutcome::OutOfRange);
        };
        let outcome = if task.is_complete() {
            MarkOutcome::AlreadyComplete
        } else {
            task.mark_done();
            MarkOutcome::Completed
        };
        self.persist()?;
        Ok(outcome)
    }

    /// Read-only view of the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Owned copy of the current list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Computes the productivity report from memory. Never touches storage.
    #[must_use]
    pub fn report(&self) -> ProductivityReport {
        ProductivityReport::from_tasks(&self.tasks)
    }

    /// Writes the whole list to storage, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or writing fails. Memory is left
    /// as is, so memory and storage may now differ.
    pub fn save(&mut self) -> Result<(), StoreError> {
        match self.storage.save(&self.tasks) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, tasks = self.tasks.len(), "could not save task list");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Nothing persisted yet loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the data cannot be read or decoded. The list
    /// is reset to empty in that case.
    pub fn load(&mut self) -> Result<(), StoreError> {
        match self.storage.load() {
            Ok(loaded) => {
                self.tasks = loaded.unwrap_or_default();
                self.last_error = None;
                tracing::info!(tasks = self.tasks.len(), "task list loaded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load task list, starting empty");
                self.tasks.clear();
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Message of the most recent failed load or save, if the last storage
    /// operation failed.
    #[must_use]
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn policy(&self) -> DurabilityPolicy {
        self.policy
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        match self.save() {
            Err(e) if self.policy == DurabilityPolicy::Strict => Err(e),
            _ => Ok(()),
        }
    }
}
