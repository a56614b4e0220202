//! Environment keys and their default values.
//!
//! # Design
//! - Keys keep the names existing token pipelines already export.
//! - Defaults produce a working layout relative to the current directory.

/// Design tool API token.
pub const ENV_ACCESS_TOKEN: &str = "FIGMA_ACCESS_TOKEN";
/// Design file identifier.
pub const ENV_FILE_ID: &str = "FIGMA_FILE_ID";
/// Local-variables endpoint template.
pub const ENV_API_URL: &str = "FIGMA_VARIABLE_API_URL";
/// Placeholder replaced by the file id inside the template.
pub const ENV_FILE_ID_PLACEHOLDER: &str = "FIGMA_FILE_ID_PLACEHOLDER";
/// Token graph JSON path.
pub const ENV_VARIABLES_FILE: &str = "VARIABLE_OUTPUT_FILE";
/// Flat CSS path.
pub const ENV_CSS_FILE: &str = "CSS_OUTPUT_FILE";
/// SCSS output directory.
pub const ENV_SCSS_DIR: &str = "SCSS_OUTPUT_DIR";
/// Tailwind output directory.
pub const ENV_TAILWIND_DIR: &str = "TAILWIND_OUTPUT_DIR";
/// Append `!default` to SCSS declarations.
pub const ENV_SCSS_DEFAULT: &str = "TOKENPRESS_SCSS_DEFAULT";
/// Comma separated generator list.
pub const ENV_GENERATORS: &str = "TOKENPRESS_GENERATORS";
/// HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT: &str = "TOKENPRESS_HTTP_TIMEOUT_SECS";

pub(crate) const API_URL: &str = "https://api.figma.com/v1/files/{{fileId}}/variables/local";
pub(crate) const FILE_ID_PLACEHOLDER: &str = "{{fileId}}";
pub(crate) const VARIABLES_FILE: &str = "tokens/variables.json";
pub(crate) const CSS_FILE: &str = "styles/variables.css";
pub(crate) const SCSS_DIR: &str = "styles/scss";
pub(crate) const TAILWIND_DIR: &str = "styles/tailwind";
pub(crate) const SCSS_DEFAULT: bool = true;
pub(crate) const GENERATORS: &str = "scss,css";
pub(crate) const HTTP_TIMEOUT_SECS: u64 = 30;
