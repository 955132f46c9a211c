//! Plain text output formatter

use super::ChunkFormatter;
use anyhow::Result;
use msgchunk_core::Chunk;
use std::io::Write;

/// Text formatter - chunk payloads separated by `---` lines
pub struct TextFormatter<W: Write> {
    writer: W,
    chunks_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks_written: 0,
        }
    }
}

impl<W: Write> ChunkFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, _chunk: &Chunk, payload: &str) -> Result<()> {
        if self.chunks_written > 0 {
            writeln!(self.writer, "---")?;
        }
        writeln!(self.writer, "{payload}")?;
        self.chunks_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
