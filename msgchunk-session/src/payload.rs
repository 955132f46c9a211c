//! Copy payload construction

use msgchunk_core::Chunk;

/// Invisible placeholder appended after a trailing line break so that
/// pasting successive chunks reproduces the original paragraph
/// spacing (U+200E LEFT-TO-RIGHT MARK)
pub const TRAILING_MARKER: char = '\u{200E}';

/// Builds the text handed to the clipboard for one chunk
///
/// Shared by direct per-chunk copies and cursor-driven copies: the
/// chunk content, followed by a newline and [`TRAILING_MARKER`] when
/// the chunk has a trailing break.
pub fn copy_payload(chunk: &Chunk) -> String {
    if chunk.has_trailing_break {
        format!("{}\n{}", chunk.content, TRAILING_MARKER)
    } else {
        chunk.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgchunk_core::split_text;

    #[test]
    fn test_payload_carries_marker_before_last_chunk() {
        let set = split_text("Hello world\n\nGoodbye");
        assert_eq!(
            copy_payload(set.get(0).unwrap()),
            format!("Hello world\n{TRAILING_MARKER}")
        );
        assert_eq!(copy_payload(set.get(1).unwrap()), "Goodbye");
    }

    #[test]
    fn test_sole_chunk_has_no_marker() {
        let set = split_text("just one chunk");
        assert_eq!(copy_payload(set.get(0).unwrap()), "just one chunk");
    }
}
