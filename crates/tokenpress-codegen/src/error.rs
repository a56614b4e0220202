//! # Design
//!
//! - Constant messages; the variable or path involved travels as a field.
//! - Lookup misses never reach this type; the driver logs and skips them.

use std::path::PathBuf;

use thiserror::Error;
use tokenpress_fsops::FsOpsError;
use tokenpress_graph::GraphError;

/// Result alias for generation.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A value shape the target syntax cannot express.
    #[error("unsupported value for target syntax")]
    UnsupportedValue {
        /// Variable name as exported.
        variable: String,
        /// Shape label of the offending value.
        kind: &'static str,
    },
    /// Alias resolution failed fatally.
    #[error("failed to resolve variable")]
    Resolve {
        /// Id of the variable being resolved.
        variable: String,
        /// Underlying graph error.
        source: GraphError,
    },
    /// An artifact could not be written.
    #[error("failed to publish artifact")]
    Publish {
        /// Destination of the artifact.
        path: PathBuf,
        /// Underlying store error.
        source: FsOpsError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn codegen_error_display_and_source() {
        let unsupported = CodegenError::UnsupportedValue {
            variable: "shadow".into(),
            kind: "unsupported",
        };
        assert_eq!(unsupported.to_string(), "unsupported value for target syntax");
        assert!(unsupported.source().is_none());

        let resolve = CodegenError::Resolve {
            variable: "a".into(),
            source: GraphError::AliasCycle {
                chain: vec!["a".into(), "a".into()],
            },
        };
        assert_eq!(resolve.to_string(), "failed to resolve variable");
        assert!(resolve.source().is_some());

        let publish = CodegenError::Publish {
            path: PathBuf::from("styles/variables.css"),
            source: FsOpsError::Io {
                operation: "fs_store.write",
                path: PathBuf::from("styles/variables.css"),
                source: io::Error::other("disk full"),
            },
        };
        assert_eq!(publish.to_string(), "failed to publish artifact");
        assert!(publish.source().is_some());
    }
}
