//! Shared task model and on-disk format for `studyplan`.

pub mod codec;
pub mod task;
