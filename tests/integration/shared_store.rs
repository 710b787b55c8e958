//! Concurrent use of the task store through `SharedTaskStore`.
//!
//! Verifies that mutations from several threads never leave storage holding
//! a list different from memory once all of them have finished.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::thread;

use studyplan::storage::{MemoryStorage, TaskStorage};
use studyplan::tasks::{DurabilityPolicy, MarkOutcome, SharedTaskStore, TaskStore};
use studyplan_model::task::Task;

const THREADS: usize = 8;
const TASKS_PER_THREAD: usize = 25;

fn make_shared() -> (SharedTaskStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = TaskStore::open(storage.clone(), DurabilityPolicy::BestEffort);
    (SharedTaskStore::new(store), storage)
}

#[test]
fn concurrent_adds_are_all_persisted() {
    let (shared, storage) = make_shared();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..TASKS_PER_THREAD {
                    shared
                        .add_task(Task::study(format!("t{t}-{i}"), 10))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len(), THREADS * TASKS_PER_THREAD);
    assert_eq!(storage.write_count(), THREADS * TASKS_PER_THREAD);
    assert_eq!(storage.load().unwrap().unwrap(), shared.snapshot());
}

#[test]
fn concurrent_adds_keep_per_thread_order() {
    let (shared, _storage) = make_shared();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..TASKS_PER_THREAD {
                    shared
                        .add_task(Task::deadline(format!("t{t}"), i.to_string()))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        let title = format!("t{t}");
        let dues: Vec<String> = shared
            .snapshot()
            .iter()
            .filter(|task| task.title() == title)
            .map(|task| task.to_string())
            .collect();
        let expected: Vec<String> = (0..TASKS_PER_THREAD)
            .map(|i| format!("Deadline: {title} (Due: {i})"))
            .collect();
        assert_eq!(dues, expected);
    }
}

#[test]
fn concurrent_marks_complete_each_task_once() {
    let (shared, storage) = make_shared();
    for i in 0..THREADS {
        shared.add_task(Task::study(format!("task {i}"), 5)).unwrap();
    }

    // Every thread tries to complete every task; exactly one wins each.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                (0..THREADS)
                    .filter(|&i| shared.mark_task_done(i).unwrap() == MarkOutcome::Completed)
                    .count()
            })
        })
        .collect();
    let completed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(completed, THREADS);
    assert_eq!(shared.report().percentage, 100);
    assert_eq!(storage.load().unwrap().unwrap(), shared.snapshot());
}
