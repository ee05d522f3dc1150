//! Error types for the webes scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that abort a validation run.
///
/// Problems scoped to a single component (unreadable file, malformed
/// section) are reported as diagnostics instead.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The components directory could not be listed
    #[error("Failed to read components directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Failed to serialize a report
    #[error("Failed to serialize report: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
