//! Output formatting module

use anyhow::Result;
use msgchunk_core::Chunk;

/// Trait for chunk output formatters
pub trait ChunkFormatter {
    /// Format and output a single chunk; `payload` is the chunk text
    /// as the caller wants it emitted (bare content or copy payload)
    fn format_chunk(&mut self, chunk: &Chunk, payload: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
