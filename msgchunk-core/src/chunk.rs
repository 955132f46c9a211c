//! Chunk and chunk-set types

/// One bounded-length segment of the split text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Position in the chunk sequence, starting at 0
    pub index: usize,

    /// The text content, with boundary whitespace trimmed at split time
    pub content: String,

    /// Whether a break separated this chunk from the next in the
    /// original text; true for every chunk except the last
    pub has_trailing_break: bool,
}

impl Chunk {
    /// Returns the byte length of this chunk's content
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if this chunk's content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns true if this is the last chunk in its set
    pub fn is_last(&self) -> bool {
        !self.has_trailing_break
    }
}

/// The ordered, index-contiguous result of one split
///
/// Owned exclusively by the splitting operation that produced it; a
/// new edit discards the old set entirely rather than patching it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
}

impl ChunkSet {
    /// Builds a set from chunk contents, assigning sequential indices
    /// and trailing-break flags
    pub(crate) fn from_contents(contents: Vec<String>) -> Self {
        let last = contents.len().saturating_sub(1);
        let chunks = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Chunk {
                index,
                content,
                has_trailing_break: index < last,
            })
            .collect();
        Self { chunks }
    }

    /// Returns the number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the set holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the chunk at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Iterates over chunks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Returns the chunks as a slice
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

impl<'a> IntoIterator for &'a ChunkSet {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_contents_assigns_indices_and_flags() {
        let set = ChunkSet::from_contents(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(set.len(), 3);
        for (i, chunk) in set.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.has_trailing_break, i < 2);
        }
        assert!(set.get(2).unwrap().is_last());
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_single_chunk_has_no_trailing_break() {
        let set = ChunkSet::from_contents(vec!["only".into()]);
        assert_eq!(set.len(), 1);
        assert!(!set.get(0).unwrap().has_trailing_break);
    }

    #[test]
    fn test_empty_set() {
        let set = ChunkSet::from_contents(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
