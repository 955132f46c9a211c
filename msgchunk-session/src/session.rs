//! Single-document session
//!
//! Owns the one mutable unit of state: raw text, the chunk set
//! recomputed from it, collapse flags, and the copy cursor. Every
//! mutation runs to completion before the next event; a text edit
//! discards the previous chunk set wholesale.

use crate::collapse::CollapseState;
use crate::cursor::{AdvanceOutcome, CopyCursor};
use crate::error::{Result, SessionError};
use crate::payload::copy_payload;
use crate::store::{KeyValueStore, PersistenceAdapter};
use msgchunk_core::{ChunkSet, ChunkSplitter};

/// Result of a cursor-driven "copy next" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyNext {
    /// A chunk was copied; the caller hands `payload` to the clipboard
    Copied {
        /// Index of the copied chunk
        index: usize,
        /// Clipboard text for the copied chunk
        payload: String,
    },
    /// The cycle completed; the cursor is unset and nothing was copied
    CycleComplete,
    /// No chunks to copy
    Empty,
}

/// One editing session over one document
pub struct Session<S> {
    splitter: ChunkSplitter,
    persistence: PersistenceAdapter<S>,
    raw_text: String,
    chunks: ChunkSet,
    collapse: CollapseState,
    cursor: CopyCursor,
}

impl<S: KeyValueStore> Session<S> {
    /// Starts a session, seeding the initial text from the store
    ///
    /// `load` is called exactly once here; a stored record triggers
    /// the first split.
    pub fn start(splitter: ChunkSplitter, store: S) -> Result<Self> {
        let persistence = PersistenceAdapter::new(store);
        let mut session = Self {
            splitter,
            persistence,
            raw_text: String::new(),
            chunks: ChunkSet::default(),
            collapse: CollapseState::default(),
            cursor: CopyCursor::default(),
        };
        if let Some(text) = session.persistence.load()? {
            session.recompute(text);
        }
        Ok(session)
    }

    /// Replaces the raw text, persists it, and recomputes every
    /// derived piece of state
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) -> Result<&ChunkSet> {
        let text = new_text.into();
        self.persistence.save(&text)?;
        self.recompute(text);
        Ok(&self.chunks)
    }

    fn recompute(&mut self, text: String) {
        self.chunks = self.splitter.split(&text);
        self.raw_text = text;
        self.collapse = CollapseState::new(self.chunks.len());
        self.cursor.reset(self.chunks.len());
    }

    /// Expands every chunk and abandons any in-progress copy sequence
    pub fn expand_all(&mut self) {
        self.collapse.expand_all();
        self.cursor.reset(self.chunks.len());
    }

    /// Collapses every chunk and abandons any in-progress copy
    /// sequence
    pub fn collapse_all(&mut self) {
        self.collapse.collapse_all();
        self.cursor.reset(self.chunks.len());
    }

    /// Flips one chunk's collapse flag, returning the new value
    pub fn toggle_chunk(&mut self, index: usize) -> Result<bool> {
        self.collapse
            .toggle(index)
            .ok_or(SessionError::InvalidCursorState {
                index,
                chunk_count: self.chunks.len(),
            })
    }

    /// Copies one chunk directly, pointing the cursor at it
    ///
    /// Returns the clipboard payload; subsequent [`Session::copy_next`]
    /// calls continue from this chunk.
    pub fn copy_chunk(&mut self, index: usize) -> Result<String> {
        let chunk = self
            .chunks
            .get(index)
            .ok_or(SessionError::InvalidCursorState {
                index,
                chunk_count: self.chunks.len(),
            })?;
        let payload = copy_payload(chunk);
        self.cursor.set(index, self.chunks.len())?;
        Ok(payload)
    }

    /// Copies the next chunk in sequence, or resets after the last
    pub fn copy_next(&mut self) -> Result<CopyNext> {
        Ok(match self.cursor.advance(self.chunks.len())? {
            AdvanceOutcome::Copy(index) => {
                // The cursor only yields indices inside the set
                let chunk = self
                    .chunks
                    .get(index)
                    .ok_or(SessionError::InvalidCursorState {
                        index,
                        chunk_count: self.chunks.len(),
                    })?;
                CopyNext::Copied {
                    index,
                    payload: copy_payload(chunk),
                }
            }
            AdvanceOutcome::Reset => CopyNext::CycleComplete,
            AdvanceOutcome::Empty => CopyNext::Empty,
        })
    }

    /// The current raw input text
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The current chunk set
    pub fn chunks(&self) -> &ChunkSet {
        &self.chunks
    }

    /// The current collapse flags
    pub fn collapse(&self) -> &CollapseState {
        &self.collapse
    }

    /// The current cursor position, `None` when unset
    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor.position()
    }

    /// Consumes the session, returning the underlying store
    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }
}
