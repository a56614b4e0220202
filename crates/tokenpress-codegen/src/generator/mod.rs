//! Generator capability and the closed set of implementations.
//!
//! # Design
//! - The driver owns iteration; generators only format declarations and decide
//!   when buffered text becomes an artifact.
//! - Lifecycle: per token `create_declaration` + `buffer_append`, then
//!   `on_mode_completed`, `on_collection_completed`, and finally `on_completed`.
//!   Each hook may hand back one artifact to publish.
//! - Implementations are selected by configuration through [`Generator`].

mod css;
mod scss;

pub use css::CssGenerator;
pub use scss::ScssGenerator;

use tokenpress_fsops::Artifact;
use tokenpress_graph::{ConcreteValue, Mode, VariableCollection};

use crate::error::Result;

/// Collection and mode currently being generated.
#[derive(Debug, Clone, Copy)]
pub struct ModeContext<'a> {
    /// Collection being walked.
    pub collection: &'a VariableCollection,
    /// Mode being walked.
    pub mode: &'a Mode,
}

/// A variable whose value has been resolved for the current mode.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedToken<'a> {
    /// Variable name as exported.
    pub name: &'a str,
    /// Terminal value.
    pub value: &'a ConcreteValue,
}

/// Output-specific half of the generation protocol.
pub trait VariableGenerator {
    /// Short name for logs.
    fn label(&self) -> &'static str;

    /// Format one declaration; `Ok(None)` skips the token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token cannot be expressed and the target does
    /// not tolerate degraded output.
    fn create_declaration(
        &self,
        token: &ResolvedToken<'_>,
        context: &ModeContext<'_>,
    ) -> Result<Option<String>>;

    /// Buffer a formatted declaration.
    fn buffer_append(&mut self, declaration: String);

    /// Called after the last token of a mode.
    fn on_mode_completed(&mut self, context: &ModeContext<'_>) -> Option<Artifact>;

    /// Called after the last mode of a collection.
    fn on_collection_completed(&mut self, collection: &VariableCollection) -> Option<Artifact>;

    /// Called once after every collection.
    fn on_completed(&mut self) -> Option<Artifact>;
}

/// Configured generator.
#[derive(Debug, Clone)]
pub enum Generator {
    /// Flat `:root` custom-property stylesheet.
    Css(CssGenerator),
    /// SCSS variable files.
    Scss(ScssGenerator),
}

impl Generator {
    fn inner(&self) -> &dyn VariableGenerator {
        match self {
            Self::Css(generator) => generator,
            Self::Scss(generator) => generator,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn VariableGenerator {
        match self {
            Self::Css(generator) => generator,
            Self::Scss(generator) => generator,
        }
    }
}

impl VariableGenerator for Generator {
    fn label(&self) -> &'static str {
        self.inner().label()
    }

    fn create_declaration(
        &self,
        token: &ResolvedToken<'_>,
        context: &ModeContext<'_>,
    ) -> Result<Option<String>> {
        self.inner().create_declaration(token, context)
    }

    fn buffer_append(&mut self, declaration: String) {
        self.inner_mut().buffer_append(declaration);
    }

    fn on_mode_completed(&mut self, context: &ModeContext<'_>) -> Option<Artifact> {
        self.inner_mut().on_mode_completed(context)
    }

    fn on_collection_completed(&mut self, collection: &VariableCollection) -> Option<Artifact> {
        self.inner_mut().on_collection_completed(collection)
    }

    fn on_completed(&mut self) -> Option<Artifact> {
        self.inner_mut().on_completed()
    }
}

/// Join non-blank buffered lines and clear the buffer.
fn drain_buffer(buffer: &mut Vec<String>) -> String {
    std::mem::take(buffer)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
