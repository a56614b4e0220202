//! Typed configuration models.
//!
//! # Design
//! - Pure data carriers; parsing lives in `validate.rs`, environment access in
//!   `loader.rs`.
//! - Credentials stay optional until a stage needs them, so offline stages run
//!   without an API token.
//! - The access token never appears in `Debug` output.

use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::defaults::{ENV_ACCESS_TOKEN, ENV_API_URL, ENV_FILE_ID};
use crate::error::{ConfigError, ConfigResult};
use crate::validate::ensure_path;

/// Where the token graph is fetched from.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// API token, when provided.
    pub access_token: Option<String>,
    /// Design file id, when provided.
    pub file_id: Option<String>,
    /// Endpoint template containing `file_id_placeholder`.
    pub url_template: String,
    /// Placeholder substituted with the file id.
    pub file_id_placeholder: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Debug for SourceConfig {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SourceConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("file_id", &self.file_id)
            .field("url_template", &self.url_template)
            .field("file_id_placeholder", &self.file_id_placeholder)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Borrowed credentials required by the fetch stage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FetchCredentials<'a> {
    /// API token sent with every request.
    pub access_token: &'a str,
    /// Design file id.
    pub file_id: &'a str,
}

impl Debug for FetchCredentials<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FetchCredentials")
            .field("access_token", &"<redacted>")
            .field("file_id", &self.file_id)
            .finish()
    }
}

impl SourceConfig {
    /// Token and file id, both required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent value.
    pub fn credentials(&self) -> ConfigResult<FetchCredentials<'_>> {
        let access_token = self
            .access_token
            .as_deref()
            .ok_or(ConfigError::Missing {
                key: ENV_ACCESS_TOKEN,
            })?;
        let file_id = self
            .file_id
            .as_deref()
            .ok_or(ConfigError::Missing { key: ENV_FILE_ID })?;
        Ok(FetchCredentials {
            access_token,
            file_id,
        })
    }

    /// Endpoint with the file id substituted into the template.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] without a file id and
    /// [`ConfigError::InvalidField`] when the result is not a valid URL.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        let file_id = self
            .file_id
            .as_deref()
            .ok_or(ConfigError::Missing { key: ENV_FILE_ID })?;
        let rendered = self.url_template.replace(&self.file_id_placeholder, file_id);
        Url::parse(&rendered)
            .map_err(|_| ConfigError::invalid(ENV_API_URL, &rendered, "not a valid URL"))
    }
}

/// Artifact locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Token graph JSON written by the fetch stage.
    pub variables_file: PathBuf,
    /// Flat CSS stylesheet; also the tailwind stage's input.
    pub css_file: PathBuf,
    /// SCSS directory.
    pub scss_dir: PathBuf,
    /// Tailwind output directory.
    pub tailwind_dir: PathBuf,
}

/// Generator implementations selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// One SCSS file per collection or collection mode.
    Scss,
    /// One flat `:root` stylesheet.
    Css,
}

impl GeneratorKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Css => "css",
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> ConfigResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scss" => Ok(Self::Scss),
            "css" => Ok(Self::Css),
            _ => Err(ConfigError::invalid(
                crate::defaults::ENV_GENERATORS,
                value,
                "unknown generator",
            )),
        }
    }
}

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Generators run, in order.
    pub generators: Vec<GeneratorKind>,
    /// Append `!default` to SCSS declarations.
    pub scss_default: bool,
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Token graph source.
    pub source: SourceConfig,
    /// Artifact locations.
    pub outputs: OutputPaths,
    /// Generation settings.
    pub generation: GenerationConfig,
}

/// Values supplied on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Token graph JSON path.
    pub variables_file: Option<PathBuf>,
    /// Flat CSS path.
    pub css_file: Option<PathBuf>,
    /// SCSS directory.
    pub scss_dir: Option<PathBuf>,
    /// Tailwind output directory.
    pub tailwind_dir: Option<PathBuf>,
    /// Generator list.
    pub generators: Option<Vec<GeneratorKind>>,
    /// `!default` toggle.
    pub scss_default: Option<bool>,
}

impl PipelineConfig {
    /// Apply command line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for empty paths or an empty
    /// generator list.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> ConfigResult<Self> {
        use crate::defaults::{
            ENV_CSS_FILE, ENV_GENERATORS, ENV_SCSS_DIR, ENV_TAILWIND_DIR, ENV_VARIABLES_FILE,
        };

        if let Some(path) = overrides.variables_file {
            self.outputs.variables_file = ensure_path(ENV_VARIABLES_FILE, path)?;
        }
        if let Some(path) = overrides.css_file {
            self.outputs.css_file = ensure_path(ENV_CSS_FILE, path)?;
        }
        if let Some(path) = overrides.scss_dir {
            self.outputs.scss_dir = ensure_path(ENV_SCSS_DIR, path)?;
        }
        if let Some(path) = overrides.tailwind_dir {
            self.outputs.tailwind_dir = ensure_path(ENV_TAILWIND_DIR, path)?;
        }
        if let Some(generators) = overrides.generators {
            if generators.is_empty() {
                return Err(ConfigError::InvalidField {
                    key: ENV_GENERATORS,
                    value: None,
                    reason: "at least one generator is required",
                });
            }
            self.generation.generators = generators;
        }
        if let Some(scss_default) = overrides.scss_default {
            self.generation.scss_default = scss_default;
        }
        Ok(self)
    }
}
