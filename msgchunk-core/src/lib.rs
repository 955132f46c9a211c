//! Boundary-aware text chunking for size-limited message fields
//!
//! This crate splits a block of text into an ordered sequence of
//! bounded-length chunks, preferring natural language boundaries
//! (paragraph breaks, line breaks, sentence ends, whitespace) over
//! hard cuts.

#![warn(missing_docs)]

pub mod boundary;
pub mod chunk;
pub mod splitter;

// Re-export key types
pub use boundary::find_last_boundary_before;
pub use chunk::{Chunk, ChunkSet};
pub use splitter::{ChunkSplitter, DEFAULT_MAX_CHUNK_LEN};

/// Split text with the default chunk length limit
pub fn split_text(text: &str) -> ChunkSet {
    ChunkSplitter::default().split(text)
}

/// Split text with an explicit chunk length limit in bytes
pub fn split_text_with_limit(text: &str, max_chunk_len: usize) -> ChunkSet {
    ChunkSplitter::new(max_chunk_len).split(text)
}
