//! Per-chunk collapse flags
//!
//! Presentation-layer state: one boolean per chunk index, default
//! expanded. Rebuilt from scratch whenever the chunk set is
//! recomputed.

/// Expand/collapse flags for every chunk in the current set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: Vec<bool>,
}

impl CollapseState {
    /// Creates all-expanded state for `chunk_count` chunks
    pub fn new(chunk_count: usize) -> Self {
        Self {
            collapsed: vec![false; chunk_count],
        }
    }

    /// Number of tracked chunks
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// Returns true when no chunks are tracked
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Sets every flag to expanded
    pub fn expand_all(&mut self) {
        self.collapsed.fill(false);
    }

    /// Sets every flag to collapsed
    pub fn collapse_all(&mut self) {
        self.collapsed.fill(true);
    }

    /// Flips one chunk's flag, returning the new value
    ///
    /// Out-of-range indices are left to the caller to validate.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.collapsed.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Returns one chunk's flag; out-of-range reads as expanded
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.get(index).copied().unwrap_or(false)
    }

    /// Returns the flags as a slice, indexed by chunk
    pub fn flags(&self) -> &[bool] {
        &self.collapsed
    }
}
