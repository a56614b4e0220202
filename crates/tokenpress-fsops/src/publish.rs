//! Artifact publishing.
//!
//! # Design
//! - Every artifact is formatted on its own; a formatting failure is logged and
//!   only that artifact is skipped.
//! - Store failures are returned to the caller and abort the stage.

use tracing::{info, warn};

use crate::artifact::Artifact;
use crate::error::FsOpsResult;
use crate::format::Formatter;
use crate::store::TextStore;

/// What happened to a published artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The artifact was written.
    Written,
    /// The artifact was skipped after a recoverable failure.
    Skipped,
}

/// Destination for generated artifacts.
pub trait ArtifactSink {
    /// Accept one artifact.
    ///
    /// # Errors
    ///
    /// Returns an error when the artifact cannot be persisted.
    fn publish(&mut self, artifact: Artifact) -> FsOpsResult<PublishOutcome>;
}

impl ArtifactSink for Vec<Artifact> {
    fn publish(&mut self, artifact: Artifact) -> FsOpsResult<PublishOutcome> {
        self.push(artifact);
        Ok(PublishOutcome::Written)
    }
}

/// Formats artifacts and writes them into a [`TextStore`].
#[derive(Debug)]
pub struct Publisher<S, F> {
    store: S,
    formatter: F,
}

impl<S: TextStore, F: Formatter> Publisher<S, F> {
    /// Publisher writing into `store`.
    #[must_use]
    pub const fn new(store: S, formatter: F) -> Self {
        Self { store, formatter }
    }

    /// Underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the publisher and return the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: TextStore, F: Formatter> ArtifactSink for Publisher<S, F> {
    fn publish(&mut self, artifact: Artifact) -> FsOpsResult<PublishOutcome> {
        let formatted = match self.formatter.format(&artifact.contents, artifact.syntax) {
            Ok(formatted) => formatted,
            Err(error) => {
                warn!(
                    path = %artifact.path.display(),
                    syntax = %artifact.syntax,
                    error = %error,
                    "formatting failed; artifact not written"
                );
                return Ok(PublishOutcome::Skipped);
            }
        };
        self.store.write_text(&artifact.path, &formatted)?;
        info!(path = %artifact.path.display(), "artifact written");
        Ok(PublishOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Syntax;
    use crate::format::TidyFormatter;
    use crate::store::MemoryStore;
    use std::error::Error;

    #[test]
    fn formats_and_writes_each_artifact() -> Result<(), Box<dyn Error>> {
        let mut publisher = Publisher::new(MemoryStore::new(), TidyFormatter);
        let outcome = publisher.publish(Artifact::new(
            "out/variables.css",
            Syntax::Css,
            ":root {--a: 1;}",
        ))?;
        assert_eq!(outcome, PublishOutcome::Written);
        assert_eq!(
            publisher.store().get("out/variables.css"),
            Some(":root {\n    --a: 1;\n}\n")
        );
        Ok(())
    }

    #[test]
    fn formatting_failure_skips_only_that_artifact() -> Result<(), Box<dyn Error>> {
        let mut publisher = Publisher::new(MemoryStore::new(), TidyFormatter);
        let broken = publisher.publish(Artifact::new("broken.css", Syntax::Css, ":root {"))?;
        let fine = publisher.publish(Artifact::new("fine.json", Syntax::Json, "{}"))?;
        assert_eq!(broken, PublishOutcome::Skipped);
        assert_eq!(fine, PublishOutcome::Written);

        let store = publisher.into_store();
        assert!(store.get("broken.css").is_none());
        assert_eq!(store.get("fine.json"), Some("{}\n"));
        Ok(())
    }

    #[test]
    fn vec_sink_collects_artifacts() -> Result<(), Box<dyn Error>> {
        let mut sink: Vec<Artifact> = Vec::new();
        sink.publish(Artifact::new("a.scss", Syntax::Scss, "$a: 1;"))?;
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].path(), std::path::Path::new("a.scss"));
        Ok(())
    }
}
