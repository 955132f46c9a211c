//! JSON output formatter

use super::ChunkFormatter;
use anyhow::Result;
use msgchunk_core::Chunk;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Chunk position in the sequence
    pub index: usize,
    /// The chunk text as emitted
    pub text: String,
    /// Byte length of the emitted text
    pub length: usize,
    /// Whether a break separated this chunk from the next
    pub has_trailing_break: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write> ChunkFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk, payload: &str) -> Result<()> {
        self.chunks.push(ChunkData {
            index: chunk.index,
            text: payload.to_string(),
            length: payload.len(),
            has_trailing_break: chunk.has_trailing_break,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_shape() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf);
            let chunk = Chunk {
                index: 0,
                content: "hello".to_string(),
                has_trailing_break: true,
            };
            formatter.format_chunk(&chunk, "hello").unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<ChunkData> =
            serde_json::from_slice(&buf).expect("output should be valid JSON");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "hello");
        assert_eq!(parsed[0].length, 5);
        assert!(parsed[0].has_trailing_break);
    }
}
