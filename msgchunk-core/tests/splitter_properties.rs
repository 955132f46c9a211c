//! Property tests for the cascade splitter

use msgchunk_core::{ChunkSet, ChunkSplitter};
use proptest::prelude::*;

/// Walks the original text chunk by chunk, allowing whitespace to be
/// skipped only at chunk boundaries
///
/// Separator whitespace is consumed one character at a time, stopping
/// as soon as the next chunk matches; chunks may themselves start
/// with whitespace the splitter preserved.
fn assert_reconstructs(original: &str, set: &ChunkSet) {
    let mut rest = original;
    for chunk in set {
        while !rest.starts_with(&chunk.content) {
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) if c.is_whitespace() => rest = chars.as_str(),
                _ => panic!(
                    "chunk {:?} not found in order within {:?}",
                    chunk.content, original
                ),
            }
        }
        rest = &rest[chunk.content.len()..];
    }
    assert!(
        rest.trim().is_empty(),
        "unconsumed text after last chunk: {rest:?}"
    );
}

#[test]
fn test_reconstruction_keeps_leading_space_inside_pieces() {
    // A paragraph break followed by a space-prefixed piece: the
    // sub-limit piece is emitted untrimmed, and the walk must not
    // strip past the separator into the chunk's own leading space
    let text = "\n\n A";
    let set = ChunkSplitter::new(4).split(text);
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(0).unwrap().content, "");
    assert_eq!(set.get(1).unwrap().content, " A");
    assert_reconstructs(text, &set);
}

proptest! {
    #[test]
    fn prop_length_bound(text in "[a-zA-Z .\\n]{0,400}", limit in 4usize..64) {
        let set = ChunkSplitter::new(limit).split(&text);
        for chunk in &set {
            // ASCII input: even the hard cut lands exactly on the limit
            prop_assert!(chunk.len() <= limit);
        }
    }

    #[test]
    fn prop_reconstruction(text in "[a-zA-Z .\\n]{0,400}", limit in 4usize..64) {
        let set = ChunkSplitter::new(limit).split(&text);
        assert_reconstructs(&text, &set);
    }

    #[test]
    fn prop_trailing_flag_set_for_all_but_last(
        text in "[a-zA-Z .\\n]{0,400}",
        limit in 4usize..64,
    ) {
        let set = ChunkSplitter::new(limit).split(&text);
        let last = set.len() - 1;
        for chunk in &set {
            prop_assert_eq!(chunk.has_trailing_break, chunk.index < last);
        }
    }

    #[test]
    fn prop_idempotent(text in "[a-zA-Z .\\n]{0,400}", limit in 4usize..64) {
        let splitter = ChunkSplitter::new(limit);
        prop_assert_eq!(splitter.split(&text), splitter.split(&text));
    }

    #[test]
    fn prop_indices_contiguous(text in "\\PC{0,200}", limit in 4usize..64) {
        let set = ChunkSplitter::new(limit).split(&text);
        for (i, chunk) in set.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn prop_unicode_chunks_are_valid_utf8_slices(
        text in "\\PC{0,200}",
        limit in 4usize..64,
    ) {
        // Splitting must never panic on multibyte input, and trimming
        // only ever removes text, never duplicates it
        let set = ChunkSplitter::new(limit).split(&text);
        let total: usize = set.iter().map(|c| c.len()).sum();
        prop_assert!(total <= text.len());
    }
}
