//! Flat custom-property stylesheet.

use std::path::PathBuf;

use tokenpress_fsops::{Artifact, Syntax};
use tokenpress_graph::VariableCollection;
use tracing::warn;

use super::{ModeContext, ResolvedToken, VariableGenerator, drain_buffer};
use crate::coerce::{TargetSyntax, to_literal};
use crate::error::Result;
use crate::naming::to_kebab_case;

/// Emits `--{collection}[-{mode}]-{name}: value;` for every token and flushes
/// one `:root` block when generation completes.
#[derive(Debug, Clone)]
pub struct CssGenerator {
    output_file: PathBuf,
    buffer: Vec<String>,
}

impl CssGenerator {
    /// Generator writing to `output_file`.
    #[must_use]
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
            buffer: Vec::new(),
        }
    }

    /// Custom-property name for a token in the given context.
    #[must_use]
    pub fn property_name(token_name: &str, context: &ModeContext<'_>) -> String {
        let mode = if context.collection.has_multiple_modes() {
            to_kebab_case(&context.mode.name)
        } else {
            String::new()
        };
        let segments = [
            to_kebab_case(&context.collection.name),
            mode,
            to_kebab_case(token_name),
        ];
        let joined = segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("-");
        format!("--{joined}")
    }
}

impl VariableGenerator for CssGenerator {
    fn label(&self) -> &'static str {
        "css"
    }

    fn create_declaration(
        &self,
        token: &ResolvedToken<'_>,
        context: &ModeContext<'_>,
    ) -> Result<Option<String>> {
        let literal = to_literal(token.value, TargetSyntax::Css).unwrap_or_else(|| {
            warn!(
                variable = token.name,
                kind = token.value.kind(),
                "unsupported value type; emitting empty value"
            );
            String::new()
        });
        let name = Self::property_name(token.name, context);
        Ok(Some(format!("{name}: {literal};")))
    }

    fn buffer_append(&mut self, declaration: String) {
        self.buffer.push(declaration);
    }

    fn on_mode_completed(&mut self, _context: &ModeContext<'_>) -> Option<Artifact> {
        None
    }

    fn on_collection_completed(&mut self, _collection: &VariableCollection) -> Option<Artifact> {
        None
    }

    fn on_completed(&mut self) -> Option<Artifact> {
        let body = drain_buffer(&mut self.buffer);
        Some(Artifact::new(
            self.output_file.clone(),
            Syntax::Css,
            format!(":root {{\n{body}\n}}\n"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenpress_graph::{ConcreteValue, Mode};
    use tokenpress_test_support::fixtures::GraphBuilder;
    use std::error::Error;
    use std::io;

    #[test]
    fn mode_segment_only_for_multi_mode_collections() -> std::result::Result<(), Box<dyn Error>> {
        let graph = GraphBuilder::new()
            .collection("single", "Brand", &[("m", "Default")])
            .collection("multi", "Semantic Color", &[("l", "Light Mode"), ("d", "Dark")])
            .build();
        let single = graph.collection("single").ok_or_else(|| io::Error::other("single"))?;
        let multi = graph.collection("multi").ok_or_else(|| io::Error::other("multi"))?;
        let single_mode = &single.modes[0];
        let light: &Mode = &multi.modes[0];

        assert_eq!(
            CssGenerator::property_name(
                "color/primary",
                &ModeContext {
                    collection: single,
                    mode: single_mode
                }
            ),
            "--brand-color-primary"
        );
        assert_eq!(
            CssGenerator::property_name(
                "accent",
                &ModeContext {
                    collection: multi,
                    mode: light
                }
            ),
            "--semantic-color-light-mode-accent"
        );
        Ok(())
    }

    #[test]
    fn unsupported_value_emits_empty_right_hand_side() -> std::result::Result<(), Box<dyn Error>> {
        let graph = GraphBuilder::new()
            .collection("c", "Effects", &[("m", "Default")])
            .build();
        let collection = graph.collection("c").ok_or_else(|| io::Error::other("c"))?;
        let context = ModeContext {
            collection,
            mode: &collection.modes[0],
        };
        let value = ConcreteValue::Unsupported(serde_json::json!([1, 2]));
        let generator = CssGenerator::new("out.css");
        let declaration = generator.create_declaration(
            &ResolvedToken {
                name: "shadow",
                value: &value,
            },
            &context,
        )?;
        assert_eq!(declaration.as_deref(), Some("--effects-shadow: ;"));
        Ok(())
    }

    #[test]
    fn flushes_single_root_block_on_completion() -> std::result::Result<(), Box<dyn Error>> {
        let mut generator = CssGenerator::new("styles/variables.css");
        generator.buffer_append("--a: 1;".into());
        generator.buffer_append("   ".into());
        generator.buffer_append("--b: 2;".into());

        let artifact = generator
            .on_completed()
            .ok_or_else(|| io::Error::other("expected artifact"))?;
        assert_eq!(artifact.path(), std::path::Path::new("styles/variables.css"));
        assert_eq!(artifact.syntax, Syntax::Css);
        assert_eq!(artifact.contents, ":root {\n--a: 1;\n--b: 2;\n}\n");
        Ok(())
    }
}
