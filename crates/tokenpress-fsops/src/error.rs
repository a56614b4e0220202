//! # Design
//!
//! - Provide structured, constant-message errors for artifact IO.
//! - Capture the operation and path so failures are reproducible in tests.
//! - Formatting failures get their own type; publishing treats them as recoverable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for file operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced while reading or writing artifacts.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// IO failures while interacting with the store.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Whether the failure was caused by a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

/// Errors produced while formatting artifact text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A closing brace without an opening one, or an unclosed block.
    #[error("unbalanced braces")]
    Unbalanced {
        /// Byte offset where the imbalance was detected.
        offset: usize,
    },
    /// A quoted string ran to the end of input.
    #[error("unterminated string")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// A block comment ran to the end of input.
    #[error("unterminated comment")]
    UnterminatedComment {
        /// Byte offset of the comment opener.
        offset: usize,
    },
    /// JSON text could not be parsed or re-encoded.
    #[error("invalid json")]
    Json {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
