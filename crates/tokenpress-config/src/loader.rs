//! Environment-backed configuration loading.
//!
//! # Design
//! - Every value goes through an injectable lookup so tests never touch the
//!   process environment.
//! - Blank values count as unset.

use tracing::debug;

use crate::defaults::{
    self, ENV_ACCESS_TOKEN, ENV_API_URL, ENV_CSS_FILE, ENV_FILE_ID, ENV_FILE_ID_PLACEHOLDER,
    ENV_GENERATORS, ENV_HTTP_TIMEOUT, ENV_SCSS_DEFAULT, ENV_SCSS_DIR, ENV_TAILWIND_DIR,
    ENV_VARIABLES_FILE,
};
use crate::error::ConfigResult;
use crate::model::{GenerationConfig, OutputPaths, PipelineConfig, SourceConfig};
use crate::validate::{
    ensure_placeholder, parse_bool, parse_generators, parse_path, parse_timeout,
};

/// Load the configuration from the process environment.
///
/// # Errors
///
/// See [`from_lookup`].
pub fn from_env() -> ConfigResult<PipelineConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Load the configuration through `lookup`.
///
/// # Errors
///
/// Returns [`crate::ConfigError::InvalidField`] for unparsable values, empty
/// paths, unknown generators, and URL templates without the placeholder.
pub fn from_lookup<F>(lookup: F) -> ConfigResult<PipelineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

    let url_template = text(ENV_API_URL, defaults::API_URL);
    let file_id_placeholder = text(ENV_FILE_ID_PLACEHOLDER, defaults::FILE_ID_PLACEHOLDER);
    ensure_placeholder(ENV_API_URL, &url_template, &file_id_placeholder)?;

    let timeout = match get(ENV_HTTP_TIMEOUT) {
        Some(value) => parse_timeout(ENV_HTTP_TIMEOUT, &value)?,
        None => std::time::Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
    };

    let source = SourceConfig {
        access_token: get(ENV_ACCESS_TOKEN).map(|value| value.trim().to_string()),
        file_id: get(ENV_FILE_ID).map(|value| value.trim().to_string()),
        url_template,
        file_id_placeholder,
        timeout,
    };

    let outputs = OutputPaths {
        variables_file: parse_path(
            ENV_VARIABLES_FILE,
            &text(ENV_VARIABLES_FILE, defaults::VARIABLES_FILE),
        )?,
        css_file: parse_path(ENV_CSS_FILE, &text(ENV_CSS_FILE, defaults::CSS_FILE))?,
        scss_dir: parse_path(ENV_SCSS_DIR, &text(ENV_SCSS_DIR, defaults::SCSS_DIR))?,
        tailwind_dir: parse_path(
            ENV_TAILWIND_DIR,
            &text(ENV_TAILWIND_DIR, defaults::TAILWIND_DIR),
        )?,
    };

    let scss_default = match get(ENV_SCSS_DEFAULT) {
        Some(value) => parse_bool(ENV_SCSS_DEFAULT, &value)?,
        None => defaults::SCSS_DEFAULT,
    };
    let generation = GenerationConfig {
        generators: parse_generators(ENV_GENERATORS, &text(ENV_GENERATORS, defaults::GENERATORS))?,
        scss_default,
    };

    let config = PipelineConfig {
        source,
        outputs,
        generation,
    };
    debug!(config = ?config, "configuration loaded");
    Ok(config)
}
