//! SCSS variable files, one per collection or collection + mode.

use std::path::PathBuf;

use tokenpress_fsops::{Artifact, Syntax};
use tokenpress_graph::VariableCollection;
use tracing::{debug, warn};

use super::{ModeContext, ResolvedToken, VariableGenerator, drain_buffer};
use crate::coerce::{TargetSyntax, to_literal};
use crate::error::{CodegenError, Result};
use crate::naming::{capitalize, is_numeric_name, to_camel_case};

/// Emits `$camelName: value[ !default];` and flushes one file per mode.
#[derive(Debug, Clone)]
pub struct ScssGenerator {
    output_dir: PathBuf,
    append_default: bool,
    buffer: Vec<String>,
}

impl ScssGenerator {
    /// Generator writing into `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, append_default: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            append_default,
            buffer: Vec::new(),
        }
    }

    /// File name for the mode being flushed.
    #[must_use]
    pub fn file_name(context: &ModeContext<'_>) -> String {
        let mut name = to_camel_case(&context.collection.name);
        if context.collection.has_multiple_modes() {
            name.push_str(&capitalize(&to_camel_case(&context.mode.name)));
        }
        name.push_str(".scss");
        name
    }
}

impl VariableGenerator for ScssGenerator {
    fn label(&self) -> &'static str {
        "scss"
    }

    fn create_declaration(
        &self,
        token: &ResolvedToken<'_>,
        _context: &ModeContext<'_>,
    ) -> Result<Option<String>> {
        if is_numeric_name(token.name) {
            debug!(variable = token.name, "numeric name cannot be an scss variable");
            return Ok(None);
        }
        let literal = to_literal(token.value, TargetSyntax::Scss).ok_or_else(|| {
            CodegenError::UnsupportedValue {
                variable: token.name.to_string(),
                kind: token.value.kind(),
            }
        })?;
        let suffix = if self.append_default { " !default" } else { "" };
        Ok(Some(format!(
            "${}: {literal}{suffix};",
            to_camel_case(token.name)
        )))
    }

    fn buffer_append(&mut self, declaration: String) {
        self.buffer.push(declaration);
    }

    fn on_mode_completed(&mut self, context: &ModeContext<'_>) -> Option<Artifact> {
        let file_name = Self::file_name(context);
        let body = drain_buffer(&mut self.buffer);
        if body.is_empty() {
            warn!(file = %file_name, "no variables to write; skipping");
            return None;
        }
        Some(Artifact::new(
            self.output_dir.join(file_name),
            Syntax::Scss,
            format!("{body}\n"),
        ))
    }

    fn on_collection_completed(&mut self, _collection: &VariableCollection) -> Option<Artifact> {
        None
    }

    fn on_completed(&mut self) -> Option<Artifact> {
        None
    }
}
