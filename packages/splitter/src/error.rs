//! Error types for the splitter.
//!
//! Uses the dual-error pattern: `SplitterError` carries the detailed context
//! for library consumers, and the binary only displays it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Source file does not exist.
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Source file exists but could not be read as text.
    #[error("Failed to read input file {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-blank line without a field delimiter.
    #[error("Malformed record on line {line_number}: no tab separator in '{line}'")]
    MalformedRecord { line_number: usize, line: String },

    /// Label directory or output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitterError {
    /// Classify a failure to read the source file.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputUnreadable { path, source }
        }
    }
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
