//! Boundary pattern queries
//!
//! A boundary pattern is one tier of the splitting cascade. The only
//! query the splitter needs is "where does the last match before a
//! byte limit start?", answered by [`find_last_boundary_before`].

use regex::Regex;
use std::sync::OnceLock;

/// Returns the start offset of the last non-overlapping match of
/// `pattern` whose start is strictly below `limit`.
///
/// Matches are produced in increasing offset order, so scanning stops
/// at the first match at or beyond `limit`. Returns `None` when no
/// qualifying match exists.
pub fn find_last_boundary_before(text: &str, pattern: &Regex, limit: usize) -> Option<usize> {
    let mut last = None;
    for m in pattern.find_iter(text) {
        if m.start() >= limit {
            break;
        }
        last = Some(m.start());
    }
    last
}

/// A run of two or more consecutive line breaks
pub fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").expect("valid pattern"))
}

/// A single line break
pub fn single_line_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n").expect("valid pattern"))
}

/// A literal period followed by a single space
///
/// The splitter cuts one byte past the match start, after the period
/// and before the space.
pub fn sentence_end() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\. ").expect("valid pattern"))
}

/// One or more consecutive whitespace characters
pub fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid pattern"))
}
