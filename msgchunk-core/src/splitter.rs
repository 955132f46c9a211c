//! Cascade splitter
//!
//! Paragraph breaks always split the text; any piece still longer
//! than the limit is cut at the best boundary available in the
//! window: line break, then sentence end, then whitespace, then a
//! hard cut at exactly the limit. Within a tier the latest boundary
//! before the limit wins, maximizing chunk fill.

use crate::boundary::{
    find_last_boundary_before, paragraph_break, sentence_end, single_line_break, whitespace_run,
};
use crate::chunk::ChunkSet;

/// Default chunk length limit in bytes, sized for common message
/// input fields
pub const DEFAULT_MAX_CHUNK_LEN: usize = 2000;

/// Splits raw text into bounded-length chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSplitter {
    max_chunk_len: usize,
}

impl Default for ChunkSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LEN)
    }
}

impl ChunkSplitter {
    /// Creates a splitter with the given chunk length limit in bytes
    pub fn new(max_chunk_len: usize) -> Self {
        Self {
            max_chunk_len: max_chunk_len.max(1),
        }
    }

    /// Returns the configured chunk length limit
    pub fn max_chunk_len(&self) -> usize {
        self.max_chunk_len
    }

    /// Splits `text` into an ordered chunk set
    ///
    /// Recomputation is idempotent: splitting the same text twice
    /// yields structurally identical sets.
    pub fn split(&self, text: &str) -> ChunkSet {
        let mut contents = Vec::new();
        for piece in paragraph_break().split(text) {
            self.bound_piece(piece, &mut contents);
        }
        ChunkSet::from_contents(contents)
    }

    /// Emits `piece` as one or more chunks no longer than the limit
    fn bound_piece(&self, piece: &str, out: &mut Vec<String>) {
        if piece.len() < self.max_chunk_len {
            out.push(piece.to_string());
            return;
        }

        let mut remaining = piece;
        while remaining.len() > self.max_chunk_len {
            let cut = self.find_cut(remaining);
            out.push(remaining[..cut].trim_end().to_string());
            remaining = remaining[cut..].trim_start();
        }
        out.push(remaining.to_string());
    }

    /// Picks the cut offset for a piece longer than the limit
    ///
    /// A boundary at offset 0 would consume no input, so it counts as
    /// not found for its tier. The hard cut backs off to a char
    /// boundary and never returns 0, guaranteeing forward progress.
    fn find_cut(&self, remaining: &str) -> usize {
        let limit = self.max_chunk_len;

        // Pieces carry no paragraph breaks; the cascade starts at
        // single line breaks
        if let Some(at) = find_last_boundary_before(remaining, single_line_break(), limit) {
            if at > 0 {
                return at;
            }
        }
        if let Some(at) = find_last_boundary_before(remaining, sentence_end(), limit) {
            // Cut after the period, before the space
            return at + 1;
        }
        if let Some(at) = find_last_boundary_before(remaining, whitespace_run(), limit) {
            if at > 0 {
                return at;
            }
        }

        // Hard-cut fallback: no boundary in the window
        let mut cut = limit.min(remaining.len());
        while cut > 0 && !remaining.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            // Limit smaller than the first character; take it whole
            cut = remaining
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(remaining.len());
        }
        cut
    }
}
