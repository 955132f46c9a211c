//! Session error types

use thiserror::Error;

/// Session-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Cursor or chunk index outside the current chunk set
    #[error("invalid cursor state: index {index} not in chunk set of {chunk_count}")]
    InvalidCursorState {
        /// The offending index
        index: usize,
        /// Size of the chunk set the cursor is bound to
        chunk_count: usize,
    },

    /// Cursor used against a chunk set it was not reset for
    #[error("stale cursor: bound to {bound} chunks, chunk set has {actual}")]
    StaleCursor {
        /// Chunk count the cursor was last reset against
        bound: usize,
        /// Chunk count of the set the caller holds
        actual: usize,
    },

    /// Persistence layer failure
    #[error("store error: {0}")]
    Store(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Store(err.to_string())
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
