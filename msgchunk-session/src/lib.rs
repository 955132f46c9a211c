//! Session state for msgchunk
//!
//! Ties splitter output to the state a presentation layer needs:
//! per-chunk collapse flags, the sequential copy cursor, copy payload
//! construction, and versioned persistence of the raw input text.

#![warn(missing_docs)]

pub mod collapse;
pub mod cursor;
pub mod error;
pub mod payload;
pub mod session;
pub mod store;

// Re-export key types
pub use collapse::CollapseState;
pub use cursor::{AdvanceOutcome, CopyCursor};
pub use error::{Result, SessionError};
pub use payload::{copy_payload, TRAILING_MARKER};
pub use session::{CopyNext, Session};
pub use store::{KeyValueStore, MemoryStore, PersistenceAdapter, STORE_NAMESPACE, STORE_VERSION};
