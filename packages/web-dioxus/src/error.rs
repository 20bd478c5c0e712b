//! Error types for loading and writing sideline content.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for sideline operations.
pub type Result<T> = std::result::Result<T, SidelineError>;

/// Sideline errors.
///
/// Rendering itself cannot fail; these cover the file and JSON boundaries.
#[derive(Debug, Error)]
pub enum SidelineError {
    /// Content file could not be read
    #[error("Failed to read content from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a required field missing, null or ill-typed
    #[error("Invalid content: {0}")]
    InvalidContent(#[from] serde_json::Error),

    /// Rendered markup could not be written
    #[error("Failed to write rendered markup to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
