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

//! Token graph core: the exported design-token payload and the alias resolver.
//!
//! Layout: `model.rs` (collections, variables, response envelope), `value.rs`
//! (tagged variable values), `filter.rs` (remote definition pruning), `resolve.rs`
//! (alias chain resolution), `error.rs` (error taxonomy).

pub mod error;
pub mod filter;
pub mod model;
pub mod resolve;
pub mod value;

pub use error::{GraphError, MissingRecord, Result};
pub use filter::remove_remote_definitions;
pub use model::{LocalVariablesResponse, Mode, TokenGraph, Variable, VariableCollection};
pub use resolve::resolve;
pub use value::{Color, ConcreteValue, VariableAlias, VariableValue};
