//! Generation driver.
//!
//! # Design
//! - Walks collections, modes, and member ids in declared order.
//! - Missing variable records and dangling aliases are logged and skipped;
//!   any other resolution failure aborts the run.
//! - Artifacts handed back by lifecycle hooks go straight to the sink.

use std::ops::AddAssign;

use tokenpress_fsops::{Artifact, ArtifactSink, PublishOutcome};
use tokenpress_graph::{TokenGraph, resolve};
use tracing::{info, warn};

use crate::error::{CodegenError, Result};
use crate::generator::{Generator, ModeContext, ResolvedToken, VariableGenerator};

/// Counters collected while generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Declarations buffered.
    pub declarations: usize,
    /// Tokens without a value for the mode, or declined by the generator.
    pub skipped: usize,
    /// Missing variable records and dangling aliases.
    pub lookup_misses: usize,
    /// Artifacts the sink wrote.
    pub artifacts_written: usize,
    /// Artifacts the sink skipped.
    pub artifacts_skipped: usize,
}

impl AddAssign for GenerationReport {
    fn add_assign(&mut self, other: Self) {
        self.declarations += other.declarations;
        self.skipped += other.skipped;
        self.lookup_misses += other.lookup_misses;
        self.artifacts_written += other.artifacts_written;
        self.artifacts_skipped += other.artifacts_skipped;
    }
}

/// Drive one generator over the whole graph.
///
/// # Errors
///
/// Returns [`CodegenError::Resolve`] for alias cycles, errors raised by the
/// generator, and [`CodegenError::Publish`] when the sink fails to persist an
/// artifact.
pub fn run_generator<G>(
    graph: &TokenGraph,
    generator: &mut G,
    sink: &mut dyn ArtifactSink,
) -> Result<GenerationReport>
where
    G: VariableGenerator + ?Sized,
{
    let mut report = GenerationReport::default();
    info!(generator = generator.label(), "starting generation");

    for collection in graph.collections() {
        info!(
            collection = %collection.name,
            id = %collection.id,
            "processing collection"
        );
        for mode in &collection.modes {
            let context = ModeContext { collection, mode };
            for variable_id in &collection.variable_ids {
                let Some(variable) = graph.variable(variable_id) else {
                    warn!(variable_id = %variable_id, "variable not found in graph");
                    report.lookup_misses += 1;
                    continue;
                };

                let value = match resolve(graph, variable, &mode.mode_id) {
                    Ok(Some(value)) => value,
                    Ok(None) => {
                        report.skipped += 1;
                        continue;
                    }
                    Err(error) if error.is_lookup_miss() => {
                        warn!(
                            variable = %variable.name,
                            error = ?error,
                            "alias target missing; skipping"
                        );
                        report.lookup_misses += 1;
                        continue;
                    }
                    Err(source) => {
                        return Err(CodegenError::Resolve {
                            variable: variable.id.clone(),
                            source,
                        });
                    }
                };

                let token = ResolvedToken {
                    name: &variable.name,
                    value,
                };
                match generator.create_declaration(&token, &context)? {
                    Some(declaration) => {
                        generator.buffer_append(declaration);
                        report.declarations += 1;
                    }
                    None => report.skipped += 1,
                }
            }
            publish(generator.on_mode_completed(&context), sink, &mut report)?;
        }
        publish(
            generator.on_collection_completed(collection),
            sink,
            &mut report,
        )?;
    }
    publish(generator.on_completed(), sink, &mut report)?;

    info!(
        generator = generator.label(),
        declarations = report.declarations,
        skipped = report.skipped,
        lookup_misses = report.lookup_misses,
        artifacts = report.artifacts_written,
        "generation finished"
    );
    Ok(report)
}

/// Drive every configured generator in order and merge their reports.
///
/// # Errors
///
/// Stops at the first generator that fails; see [`run_generator`].
pub fn run_generators(
    graph: &TokenGraph,
    generators: &mut [Generator],
    sink: &mut dyn ArtifactSink,
) -> Result<GenerationReport> {
    let mut total = GenerationReport::default();
    for generator in generators {
        total += run_generator(graph, generator, sink)?;
    }
    Ok(total)
}

fn publish(
    artifact: Option<Artifact>,
    sink: &mut dyn ArtifactSink,
    report: &mut GenerationReport,
) -> Result<()> {
    let Some(artifact) = artifact else {
        return Ok(());
    };
    let path = artifact.path.clone();
    match sink
        .publish(artifact)
        .map_err(|source| CodegenError::Publish { path, source })?
    {
        PublishOutcome::Written => report.artifacts_written += 1,
        PublishOutcome::Skipped => report.artifacts_skipped += 1,
    }
    Ok(())
}
