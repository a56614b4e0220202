//! Generated artifact model.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Syntax of an artifact, used as the formatter hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Plain CSS.
    Css,
    /// SCSS.
    Scss,
    /// JSON.
    Json,
}

impl Syntax {
    /// Lowercase label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }
}

impl Display for Syntax {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Text file produced by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Destination path, relative to the store root unless absolute.
    pub path: PathBuf,
    /// Syntax hint for formatting.
    pub syntax: Syntax,
    /// Unformatted contents.
    pub contents: String,
}

impl Artifact {
    /// Build an artifact.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, syntax: Syntax, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            syntax,
            contents: contents.into(),
        }
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
