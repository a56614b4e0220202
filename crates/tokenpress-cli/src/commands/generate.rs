use std::path::Path;

use tokenpress_codegen::{CssGenerator, Generator, ScssGenerator, run_generators};
use tokenpress_config::{GeneratorKind, OutputPaths, PipelineConfig};
use tokenpress_fsops::{FsStore, Publisher, TidyFormatter};
use tokenpress_graph::TokenGraph;
use tracing::info;

use crate::client::CliResult;
use crate::commands::{failure_with, read_input};
use crate::output::{generation_summary, render};

pub(crate) fn handle_generate(config: &PipelineConfig, store: &FsStore) -> CliResult<()> {
    let graph = load_graph(store, &config.outputs.variables_file)?;
    let mut generators = build_generators(
        &config.generation.generators,
        config.generation.scss_default,
        &config.outputs,
    );

    let mut publisher = Publisher::new(store.clone(), TidyFormatter);
    let report = run_generators(&graph, &mut generators, &mut publisher)
        .map_err(|err| failure_with(err, "token generation failed".to_string()))?;

    render(&generation_summary(&report));
    Ok(())
}

fn load_graph(store: &FsStore, path: &Path) -> CliResult<TokenGraph> {
    let text = read_input(store, path, "fetch")?;
    let graph = TokenGraph::from_json(&text)
        .map_err(|err| failure_with(err, format!("failed to parse {}", path.display())))?;
    info!(
        path = %path.display(),
        collections = graph.collection_count(),
        variables = graph.variable_count(),
        "token graph loaded"
    );
    Ok(graph)
}

fn build_generators(
    kinds: &[GeneratorKind],
    scss_default: bool,
    outputs: &OutputPaths,
) -> Vec<Generator> {
    kinds
        .iter()
        .map(|kind| match kind {
            GeneratorKind::Scss => {
                Generator::Scss(ScssGenerator::new(&outputs.scss_dir, scss_default))
            }
            GeneratorKind::Css => Generator::Css(CssGenerator::new(&outputs.css_file)),
        })
        .collect()
}
