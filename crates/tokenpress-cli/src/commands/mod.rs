//! Stage handlers.
//!
//! Every handler reads and writes through an [`FsStore`] so tests can point the
//! pipeline at a temporary directory.

use std::path::Path;

use tokenpress_config::PipelineConfig;
use tokenpress_fsops::{FsStore, TextStore};

use crate::client::{CliError, CliResult};

pub(crate) mod fetch;
pub(crate) mod generate;
pub(crate) mod tailwind;

pub(crate) use fetch::handle_fetch;
pub(crate) use generate::handle_generate;
pub(crate) use tailwind::handle_tailwind;

/// Fetch, generate, then rewrite into the tailwind theme.
pub(crate) async fn handle_all(config: &PipelineConfig, store: &FsStore) -> CliResult<()> {
    handle_fetch(config, store).await?;
    handle_generate(config, store)?;
    handle_tailwind(config, store)
}

/// Read a stage input, pointing at the producing command when it is missing.
pub(crate) fn read_input(store: &FsStore, path: &Path, producer: &str) -> CliResult<String> {
    match store.read_text(path) {
        Ok(text) => Ok(text),
        Err(err) if err.is_not_found() => Err(CliError::validation(format!(
            "{} not found; run `tokenpress {producer}` first",
            path.display()
        ))),
        Err(err) => Err(failure_with(
            err,
            format!("failed to read {}", path.display()),
        )),
    }
}

/// Operational failure with a human readable context line.
pub(crate) fn failure_with<E>(error: E, context: String) -> CliError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CliError::failure(anyhow::Error::new(error).context(context))
}
