//! Sequential copy cursor
//!
//! Tracks which chunk the "copy next" workflow is on. Advancing past
//! the last chunk resets the cursor without copying, so a full cycle
//! of N+1 calls copies chunks 0..N exactly once each and ends unset.

use crate::error::{Result, SessionError};

/// What a single advance call asks the caller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Copy the chunk at this index
    Copy(usize),
    /// The cycle completed; nothing was copied on this call
    Reset,
    /// The chunk set is empty; nothing to do
    Empty,
}

/// Session-scoped pointer into one chunk set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyCursor {
    position: Option<usize>,
    chunk_count: usize,
}

impl CopyCursor {
    /// Creates an unset cursor bound to a chunk set of `chunk_count`
    pub fn new(chunk_count: usize) -> Self {
        Self {
            position: None,
            chunk_count,
        }
    }

    /// Unsets the cursor and rebinds it to a new chunk count
    ///
    /// Must be called whenever the chunk set is recomputed.
    pub fn reset(&mut self, chunk_count: usize) {
        self.position = None;
        self.chunk_count = chunk_count;
    }

    /// Returns the current position, or `None` when unset
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Steps the cursor for a "copy next" request
    ///
    /// `chunk_count` is the size of the chunk set the caller holds;
    /// it must match the count this cursor was reset against, or the
    /// call fails with [`SessionError::StaleCursor`].
    pub fn advance(&mut self, chunk_count: usize) -> Result<AdvanceOutcome> {
        if chunk_count != self.chunk_count {
            return Err(SessionError::StaleCursor {
                bound: self.chunk_count,
                actual: chunk_count,
            });
        }

        Ok(match self.position {
            _ if self.chunk_count == 0 => AdvanceOutcome::Empty,
            None => {
                self.position = Some(0);
                AdvanceOutcome::Copy(0)
            }
            Some(p) if p + 1 >= self.chunk_count => {
                self.position = None;
                AdvanceOutcome::Reset
            }
            Some(p) => {
                self.position = Some(p + 1);
                AdvanceOutcome::Copy(p + 1)
            }
        })
    }

    /// Points the cursor at `index` after a direct per-chunk copy
    ///
    /// No copy side effect of its own; the copy already happened via
    /// the direct action.
    pub fn set(&mut self, index: usize, chunk_count: usize) -> Result<()> {
        if chunk_count != self.chunk_count {
            return Err(SessionError::StaleCursor {
                bound: self.chunk_count,
                actual: chunk_count,
            });
        }
        if index >= self.chunk_count {
            return Err(SessionError::InvalidCursorState {
                index,
                chunk_count: self.chunk_count,
            });
        }
        self.position = Some(index);
        Ok(())
    }
}
