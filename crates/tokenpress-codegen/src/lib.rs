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

//! Stylesheet generation from a resolved token graph.
//!
//! Layout:
//! - `naming.rs`: kebab/camel identifier helpers
//! - `coerce.rs`: concrete value to CSS / SCSS literal
//! - `generator/`: the generator capability and its CSS and SCSS implementations
//! - `pipeline.rs`: collection → mode → token walk driving the generators
//! - `error.rs`: error taxonomy

pub mod coerce;
pub mod error;
pub mod generator;
pub mod naming;
pub mod pipeline;

pub use coerce::{TargetSyntax, to_literal};
pub use error::{CodegenError, Result};
pub use generator::{
    CssGenerator, Generator, ModeContext, ResolvedToken, ScssGenerator, VariableGenerator,
};
pub use pipeline::{GenerationReport, run_generator, run_generators};
