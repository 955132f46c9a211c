//! msgchunk CLI library
//!
//! This library provides the command-line interface for the msgchunk
//! boundary-aware text chunking system.

pub mod commands;
pub mod error;
pub mod output;
pub mod store;

pub use error::{CliError, CliResult};
