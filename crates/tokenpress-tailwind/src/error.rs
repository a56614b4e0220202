//! # Design
//!
//! - Parse and configuration failures are fatal for the tailwind stage.
//! - The variant mismatch message lists every offending variable so the
//!   token file can be fixed in one pass.

use thiserror::Error;

/// Result alias for the tailwind stage.
pub type Result<T> = std::result::Result<T, TailwindError>;

/// Errors raised while rewriting declarations.
#[derive(Debug, Error)]
pub enum TailwindError {
    /// A declaration did not contain exactly one `:`.
    #[error("malformed declaration")]
    MalformedDeclaration {
        /// Offending text, trimmed.
        text: String,
        /// Number of colons found.
        colons: usize,
    },
    /// A prefix pattern failed to compile.
    #[error("invalid prefix pattern")]
    Pattern {
        /// Pattern source.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
    /// Theme variants do not define the same variables.
    #[error("theme variants define different variables:\n{}", issues.join("\n"))]
    VariantMismatch {
        /// One line per missing or extra variable.
        issues: Vec<String>,
    },
    /// A mirrored group names a group that has not been built.
    #[error("unknown source group")]
    UnknownGroup {
        /// Name of the missing group.
        name: String,
    },
}
