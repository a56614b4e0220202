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

//! Prefix-driven rewriting of flat custom properties into a utility theme.
//!
//! Layout:
//! - `declaration.rs` / `collection.rs`: the declaration model
//! - `matcher.rs`: literal / pattern / any-of prefix matching
//! - `stylesheet.rs`: reading declarations out of CSS text and wrapping blocks
//! - `rewrite.rs`: extraction, namespace mapping, value modifiers, pointers
//! - `namespace.rs`: the closed set of utility namespaces
//! - `theme.rs`: theme variants and the `@theme` block
//! - `tables.rs`: the static rule tables
//! - `assemble.rs`: runs the tables and produces the output files

pub mod assemble;
pub mod collection;
pub mod declaration;
pub mod error;
pub mod matcher;
pub mod namespace;
pub mod rewrite;
pub mod stylesheet;
pub mod tables;
pub mod theme;

pub use assemble::{TailwindOutput, ThemeLayout, ThemeVariant, assemble};
pub use collection::DeclarationCollection;
pub use declaration::Declaration;
pub use error::{Result, TailwindError};
pub use matcher::PrefixMatcher;
pub use namespace::Namespace;
pub use rewrite::{
    CssUnit, DeclarationPool, Extraction, MappingRule, NamespaceMapping, PX_TO_REM, ValueModifier,
    extract_by_prefix, map_by_prefix, pointers,
};
pub use stylesheet::{data_theme_block, parse_declarations, wrap_in_root};
pub use theme::{TailwindTheme, Theme, ensure_uniform_variants};
