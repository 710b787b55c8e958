//! Serialization of a whole task list for the `studyplan` data file.
//!
//! Wire format: `[magic "SPLN"][postcard Vec<Task>]`. The list is always
//! written and read as a single unit; there is no incremental format.

use crate::task::Task;

/// Leading bytes identifying a `studyplan` data file.
pub const MAGIC: [u8; 4] = *b"SPLN";

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The data does not start with the expected magic bytes.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// A task list decoded successfully but bytes were left over.
    #[error("{0} trailing bytes after task list")]
    TrailingBytes(usize),
}

/// Encodes a task list, prefixed with [`MAGIC`].
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the list cannot be serialized.
pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, CodecError> {
    let payload =
        postcard::to_allocvec(tasks).map_err(|e| CodecError::Serialization(e.to_string()))?;
    let mut bytes = Vec::with_capacity(MAGIC.len() + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decodes a task list previously produced by [`encode`].
///
/// # Errors
///
/// Returns `CodecError::InvalidHeader` if the magic is missing or wrong,
/// `CodecError::Serialization` if the payload is corrupt, or
/// `CodecError::TrailingBytes` if data follows the list.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>, CodecError> {
    let Some(payload) = bytes.strip_prefix(&MAGIC) else {
        return Err(CodecError::InvalidHeader(format!(
            "expected {MAGIC:?}, got {:?}",
            &bytes[..bytes.len().min(MAGIC.len())]
        )));
    };
    let (tasks, rest) = postcard::take_from_bytes::<Vec<Task>>(payload)
        .map_err(|e| CodecError::Serialization(e.to_string()))?;
    if !rest.is_empty() {
        return Err(CodecError::TrailingBytes(rest.len()));
    }
    Ok(tasks)
}
