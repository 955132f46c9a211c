//! Markdown output formatter

use super::ChunkFormatter;
use anyhow::Result;
use msgchunk_core::Chunk;
use std::io::Write;

/// Markdown formatter - numbered chunk sections with a summary footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunks_written: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks_written: 0,
        }
    }
}

impl<W: Write> ChunkFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk, payload: &str) -> Result<()> {
        writeln!(self.writer, "## Chunk {}", chunk.index + 1)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{payload}")?;
        writeln!(self.writer)?;
        self.chunks_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunks_written)?;
        self.writer.flush()?;
        Ok(())
    }
}
