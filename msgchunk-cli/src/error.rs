//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Nothing saved in the persistence store to restore
    NoSavedText,
    /// Persistence store failure
    StoreError(String),
    /// Splitting or session error
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::NoSavedText => write!(f, "No saved text to restore"),
            CliError::StoreError(msg) => write!(f, "Store error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("draft.txt".to_string()).to_string(),
            "File not found: draft.txt"
        );
        assert_eq!(
            CliError::NoSavedText.to_string(),
            "No saved text to restore"
        );
        assert_eq!(
            CliError::StoreError("disk full".to_string()).to_string(),
            "Store error: disk full"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ProcessingError("bad input".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("ProcessingError"));
    }
}
