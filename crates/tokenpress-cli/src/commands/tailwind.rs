use tokenpress_config::PipelineConfig;
use tokenpress_fsops::{ArtifactSink, FsStore, PublishOutcome, Publisher, TidyFormatter};
use tokenpress_tailwind::{ThemeLayout, assemble, parse_declarations};
use tracing::info;

use crate::client::CliResult;
use crate::commands::{failure_with, read_input};
use crate::output::{render, tailwind_summary};

pub(crate) fn handle_tailwind(config: &PipelineConfig, store: &FsStore) -> CliResult<()> {
    let css_path = &config.outputs.css_file;
    let css = read_input(store, css_path, "generate")?;
    let declarations = parse_declarations(&css).map_err(|err| {
        failure_with(
            err,
            format!("failed to read declarations from {}", css_path.display()),
        )
    })?;
    info!(count = declarations.len(), "declarations loaded");

    let layout = ThemeLayout::standard()
        .map_err(|err| failure_with(err, "invalid theme layout".to_string()))?;
    let output = assemble(&layout, declarations)
        .map_err(|err| failure_with(err, "failed to assemble tailwind theme".to_string()))?;
    let unbound = output.unbound;

    let dir = &config.outputs.tailwind_dir;
    let mut publisher = Publisher::new(store.clone(), TidyFormatter);
    let mut written = 0;
    for artifact in output.into_artifacts(dir) {
        let path = artifact.path.clone();
        let outcome = publisher
            .publish(artifact)
            .map_err(|err| failure_with(err, format!("failed to write {}", path.display())))?;
        if outcome == PublishOutcome::Written {
            written += 1;
        }
    }

    render(&tailwind_summary(dir, written, unbound));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CliError;
    use std::error::Error;
    use std::fs;
    use tokenpress_config::from_lookup;
    use tokenpress_test_support::stylesheets::{MISMATCHED_THEMES, SAMPLE_STYLESHEET};

    fn workspace(css: &str) -> Result<(tempfile::TempDir, PipelineConfig), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("styles"))?;
        fs::write(dir.path().join("styles/variables.css"), css)?;
        Ok((dir, from_lookup(|_| None)?))
    }

    #[test]
    fn writes_theme_variants_and_unbound_report() -> Result<(), Box<dyn Error>> {
        let (dir, config) = workspace(SAMPLE_STYLESHEET)?;
        handle_tailwind(&config, &FsStore::new(dir.path()))
            .map_err(|err| err.display_message())?;

        let out = dir.path().join("styles/tailwind");
        let theme = fs::read_to_string(out.join("theme.css"))?;
        assert!(theme.starts_with("@theme inline {\n"));
        assert!(
            theme.contains("    --border-color-subtle: var(--semantic-color-border-subtle);\n")
        );
        assert!(theme.contains("    --ring-color-subtle: var(--semantic-color-border-subtle);\n"));

        let variables = fs::read_to_string(out.join("variables.css"))?;
        assert!(variables.contains("    [data-theme='dark'] {\n"));

        assert_eq!(
            fs::read_to_string(out.join("missing-variables.css"))?,
            ":root {\n    --elevation-card: 2;\n}\n"
        );
        Ok(())
    }

    #[test]
    fn variant_mismatch_is_failure_with_details() -> Result<(), Box<dyn Error>> {
        let (dir, config) = workspace(MISMATCHED_THEMES)?;
        let result = handle_tailwind(&config, &FsStore::new(dir.path()));
        let Err(err @ CliError::Failure(_)) = result else {
            return Err("expected a failure".into());
        };
        assert!(
            err.display_message()
                .contains("Variable \"--semantic-color-accent\" is missing in theme \"dark\".")
        );
        assert!(!dir.path().join("styles/tailwind").exists());
        Ok(())
    }

    #[test]
    fn malformed_declaration_is_failure() -> Result<(), Box<dyn Error>> {
        let (dir, config) = workspace(":root { --broken 1; }")?;
        let result = handle_tailwind(&config, &FsStore::new(dir.path()));
        assert!(matches!(result, Err(CliError::Failure(_))));
        Ok(())
    }
}
