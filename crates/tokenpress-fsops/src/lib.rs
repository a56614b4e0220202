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

//! File collaborators for the generation pipeline: artifacts, text stores,
//! formatting, and publishing.
//!
//! Layout: `artifact.rs` (artifact model), `store.rs` (filesystem and in-memory
//! stores), `format.rs` (stylesheet / JSON formatter), `publish.rs` (format then
//! write, isolating per-artifact formatting failures), `error.rs`.

pub mod artifact;
pub mod error;
pub mod format;
pub mod publish;
pub mod store;

pub use artifact::{Artifact, Syntax};
pub use error::{FormatError, FsOpsError, FsOpsResult};
pub use format::{Formatter, TidyFormatter};
pub use publish::{ArtifactSink, PublishOutcome, Publisher};
pub use store::{FsStore, MemoryStore, TextStore};
