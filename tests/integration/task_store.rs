//! Integration tests for the file-backed task store.
//!
//! Exercises the store the way the CLI does: open on a data file, mutate,
//! drop, and reopen to simulate a process restart.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use studyplan::app;
use studyplan::config::Command;
use studyplan::report::Tier;
use studyplan::storage::{FileStorage, StoreError, TaskStorage};
use studyplan::tasks::{DurabilityPolicy, MarkOutcome, TaskStore};
use studyplan_model::task::{Task, TaskKind};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Returns a fresh, empty directory for one test.
fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("studyplan-integ").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

/// Opens a best-effort store on `path`.
fn open(path: &Path) -> TaskStore<FileStorage> {
    TaskStore::open(FileStorage::new(path), DurabilityPolicy::BestEffort)
}

// ---------------------------------------------------------------------------
// Restart round-trips
// ---------------------------------------------------------------------------

#[test]
fn tasks_survive_restart() {
    let path = test_dir("restart").join("tasks.bin");

    let mut store = open(&path);
    store.add_task(Task::study("Organic chemistry", 50)).unwrap();
    store.add_task(Task::deadline("History essay", "2024-03-14")).unwrap();
    store.add_task(Task::study("Vocabulary", 15)).unwrap();
    store.mark_task_done(1).unwrap();
    let before = store.snapshot();
    drop(store);

    let store = open(&path);
    assert_eq!(store.tasks(), before.as_slice());
    assert_eq!(
        store.tasks()[1].kind(),
        &TaskKind::Deadline {
            due_date: "2024-03-14".to_string()
        }
    );
    assert!(store.tasks()[1].is_complete());
    assert!(!store.tasks()[0].is_complete());
}

#[test]
fn every_mutation_is_written_through() {
    let path = test_dir("write-through").join("tasks.bin");
    let mut store = open(&path);
    let storage = FileStorage::new(&path);

    store.add_task(Task::study("A", 10)).unwrap();
    assert_eq!(storage.load().unwrap().unwrap(), store.snapshot());

    store.add_task(Task::deadline("B", "soon")).unwrap();
    assert_eq!(storage.load().unwrap().unwrap(), store.snapshot());

    store.mark_task_done(0).unwrap();
    assert_eq!(storage.load().unwrap().unwrap(), store.snapshot());
}

#[test]
fn out_of_range_mark_leaves_file_untouched() {
    let path = test_dir("out-of-range").join("tasks.bin");
    let mut store = open(&path);
    store.add_task(Task::study("Only", 5)).unwrap();
    let bytes_before = std::fs::read(&path).unwrap();

    assert_eq!(store.mark_task_done(1).unwrap(), MarkOutcome::OutOfRange);
    assert_eq!(store.mark_task_done(99).unwrap(), MarkOutcome::OutOfRange);

    assert_eq!(std::fs::read(&path).unwrap(), bytes_before);
}

#[test]
fn out_of_range_mark_on_fresh_store_creates_no_file() {
    let path = test_dir("no-file").join("tasks.bin");
    let mut store = open(&path);
    assert_eq!(store.mark_task_done(0).unwrap(), MarkOutcome::OutOfRange);
    assert!(!path.exists());
}

// ---------------------------------------------------------------------------
// Recovery
// ---------------------------------------------------------------------------

#[test]
fn missing_file_starts_empty() {
    let path = test_dir("missing").join("tasks.bin");
    let store = open(&path);
    assert!(store.is_empty());
    assert!(store.last_persist_error().is_none());
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced_on_next_save() {
    let path = test_dir("corrupt").join("tasks.bin");
    std::fs::write(&path, b"\x00\x01garbage").unwrap();

    let mut store = open(&path);
    assert!(store.is_empty());
    assert!(store.last_persist_error().is_some());

    store.add_task(Task::study("Fresh start", 20)).unwrap();
    drop(store);

    let store = open(&path);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title(), "Fresh start");
}

#[test]
fn explicit_load_reports_corruption() {
    let path = test_dir("explicit-load").join("tasks.bin");
    let mut store = open(&path);
    store.add_task(Task::study("A", 1)).unwrap();
    std::fs::write(&path, b"SPLN\xff\xff\xff").unwrap();

    let result = store.load();

    assert!(matches!(result, Err(StoreError::Codec(_))));
    assert!(store.is_empty());
}

#[test]
fn unwritable_path_is_swallowed_in_best_effort_mode() {
    let dir = test_dir("unwritable");
    // The data "file" is an existing directory, so writes fail.
    let mut store = TaskStore::open(FileStorage::new(&dir), DurabilityPolicy::BestEffort);

    store.add_task(Task::study("Kept in memory", 30)).unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.last_persist_error().is_some());
}

#[test]
fn unwritable_path_fails_in_strict_mode() {
    let dir = test_dir("unwritable-strict");
    let mut store = TaskStore::open(FileStorage::new(&dir), DurabilityPolicy::Strict);

    let result = store.add_task(Task::study("Kept in memory", 30));

    assert!(matches!(result, Err(StoreError::Io { .. })));
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn report_boundaries_after_restart() {
    let path = test_dir("report").join("tasks.bin");
    let mut store = open(&path);
    store.add_task(Task::study("A", 10)).unwrap();
    store.add_task(Task::study("B", 10)).unwrap();
    store.mark_task_done(0).unwrap();
    drop(store);

    let mut store = open(&path);
    assert_eq!(store.report().percentage, 50);
    assert_eq!(store.report().tier, Some(Tier::Good));

    store.add_task(Task::deadline("C", "later")).unwrap();
    assert_eq!(store.report().percentage, 33);
    assert_eq!(store.report().tier, Some(Tier::FallingBehind));

    store.mark_task_done(1).unwrap();
    store.mark_task_done(2).unwrap();
    assert_eq!(
        store.report().to_string(),
        "PRODUCTIVITY SCORE: 100% | Excellent! You crushed it."
    );
}

// ---------------------------------------------------------------------------
// CLI flow
// ---------------------------------------------------------------------------

#[test]
fn cli_commands_persist_across_runs() {
    let path = test_dir("cli").join("tasks.bin");

    let commands = [
        Command::AddStudy {
            title: "Statistics".to_string(),
            minutes: 25,
        },
        Command::AddDeadline {
            title: "Thesis outline".to_string(),
            due: "Oct 1".to_string(),
        },
        Command::Done { position: 1 },
    ];
    for command in commands {
        // Each command runs in its own "process".
        let mut store = open(&path);
        app::execute(&mut store, Some(command), &mut Vec::new()).unwrap();
    }

    let mut store = open(&path);
    let mut out = Vec::new();
    app::execute(&mut store, None, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("1. [DONE]    Study: Statistics (25 mins)"));
    assert!(text.contains("2. [PENDING] Deadline: Thesis outline (Due: Oct 1)"));
    assert!(text.contains("PRODUCTIVITY SCORE: 50% | Good job, keep going!"));
}
