#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Typed pipeline configuration assembled from environment variables.
//!
//! Layout: `model.rs` (configuration types and overrides), `validate.rs`
//! (parsing helpers), `loader.rs` (environment lookup), `defaults.rs`.

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{from_env, from_lookup};
pub use model::{
    ConfigOverrides, FetchCredentials, GenerationConfig, GeneratorKind, OutputPaths,
    PipelineConfig, SourceConfig,
};
