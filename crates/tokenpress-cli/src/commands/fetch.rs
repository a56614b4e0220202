use anyhow::Context;
use tokenpress_config::PipelineConfig;
use tokenpress_fsops::{
    Artifact, ArtifactSink, FsStore, PublishOutcome, Publisher, Syntax, TidyFormatter,
};
use tokenpress_graph::remove_remote_definitions;
use tracing::{info, warn};

use crate::client::{CliError, CliResult, FigmaClient};
use crate::output::{fetch_summary, render};

pub(crate) async fn handle_fetch(config: &PipelineConfig, store: &FsStore) -> CliResult<()> {
    let client = FigmaClient::new(&config.source)?;
    let graph = remove_remote_definitions(client.fetch_token_graph().await?);
    info!(
        collections = graph.collection_count(),
        variables = graph.variable_count(),
        "local token graph ready"
    );

    let json = graph
        .to_json_pretty()
        .context("failed to serialize token graph")
        .map_err(CliError::failure)?;
    let path = &config.outputs.variables_file;
    let mut publisher = Publisher::new(store.clone(), TidyFormatter);
    let outcome = publisher
        .publish(Artifact::new(path, Syntax::Json, json))
        .with_context(|| format!("failed to write {}", path.display()))
        .map_err(CliError::failure)?;
    if outcome == PublishOutcome::Skipped {
        warn!(path = %path.display(), "token graph was not written");
        return Err(CliError::failure(anyhow::anyhow!(
            "token graph could not be formatted for {}",
            path.display()
        )));
    }

    render(&fetch_summary(
        path,
        graph.collection_count(),
        graph.variable_count(),
    ));
    Ok(())
}
