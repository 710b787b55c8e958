//! `studyplan` is a personal study and deadline tracker library.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod report;
pub mod storage;
pub mod tasks;
