//! Store error types
//!
//! Every error is terminal for the invocation. "Not found" and "already
//! exists" are not errors: they are reported through the output sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading, decoding, or writing the backing file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing file is neither empty nor a JSON array of users
    #[error("Invalid record file {}: {source}", .path.display())]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Caller-supplied item is not a user object
    #[error("Invalid item: {0}")]
    InvalidItem(#[source] serde_json::Error),

    #[error("Failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing the result to the output sink failed
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl StoreError {
    /// True when the failure came from decoding JSON
    pub fn is_decode(&self) -> bool {
        matches!(self, StoreError::CorruptFile { .. } | StoreError::InvalidItem(_))
    }
}
