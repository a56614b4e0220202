//! Parsing helpers for environment values.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::model::GeneratorKind;

/// Reject empty paths.
pub(crate) fn ensure_path(key: &'static str, path: PathBuf) -> ConfigResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            key,
            value: None,
            reason: "path must not be empty",
        });
    }
    Ok(path)
}

pub(crate) fn parse_path(key: &'static str, value: &str) -> ConfigResult<PathBuf> {
    ensure_path(key, PathBuf::from(value.trim()))
}

pub(crate) fn parse_bool(key: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "must be a boolean")),
    }
}

/// Comma separated generator names; blanks between commas are ignored.
pub(crate) fn parse_generators(key: &'static str, value: &str) -> ConfigResult<Vec<GeneratorKind>> {
    let mut generators = Vec::new();
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind: GeneratorKind = name.parse()?;
        if !generators.contains(&kind) {
            generators.push(kind);
        }
    }
    if generators.is_empty() {
        return Err(ConfigError::invalid(
            key,
            value,
            "at least one generator is required",
        ));
    }
    Ok(generators)
}

pub(crate) fn parse_timeout(key: &'static str, value: &str) -> ConfigResult<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::invalid(
            key,
            value,
            "must be a positive number of seconds",
        )),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
    }
}

pub(crate) fn ensure_placeholder(
    key: &'static str,
    template: &str,
    placeholder: &str,
) -> ConfigResult<()> {
    if placeholder.is_empty() || !template.contains(placeholder) {
        return Err(ConfigError::invalid(
            key,
            template,
            "template does not contain the file id placeholder",
        ));
    }
    Ok(())
}
