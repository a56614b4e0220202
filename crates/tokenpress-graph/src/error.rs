//! # Design
//!
//! - Constant-message errors for decoding and alias resolution.
//! - Identifiers travel as structured fields so callers can log them.
//! - Dangling aliases are lookup misses; cycles are fatal.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// Result alias for token graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Record kind an alias pointed at but which was absent from the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecord {
    /// The referenced variable does not exist.
    Variable,
    /// The referenced variable exists but its collection does not.
    Collection,
}

impl Display for MissingRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => formatter.write_str("variable"),
            Self::Collection => formatter.write_str("collection"),
        }
    }
}

/// Errors raised while decoding or resolving the token graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The token graph JSON could not be decoded.
    #[error("failed to decode token graph")]
    Decode {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The token graph could not be encoded back to JSON.
    #[error("failed to encode token graph")]
    Encode {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// An alias referenced a record that is not part of the graph.
    #[error("alias target missing from token graph")]
    DanglingAlias {
        /// Variable holding the alias.
        variable_id: String,
        /// Identifier the alias pointed at.
        target_id: String,
        /// Which record was missing.
        missing: MissingRecord,
    },
    /// An alias chain revisited a (variable, mode) pair.
    #[error("alias cycle detected")]
    AliasCycle {
        /// Variable identifiers along the chain, ending with the repeated one.
        chain: Vec<String>,
    },
}

impl GraphError {
    /// Whether the error is a lookup miss the caller should log and skip.
    #[must_use]
    pub const fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::DanglingAlias { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;
    use std::error::Error;

    #[test]
    fn graph_error_display_and_source() {
        let decode = GraphError::Decode {
            source: serde_json::Error::custom("bad"),
        };
        assert_eq!(decode.to_string(), "failed to decode token graph");
        assert!(decode.source().is_some());

        let cycle = GraphError::AliasCycle {
            chain: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(cycle.to_string(), "alias cycle detected");
        assert!(cycle.source().is_none());
        assert!(!cycle.is_lookup_miss());
    }

    #[test]
    fn dangling_alias_is_lookup_miss() {
        let err = GraphError::DanglingAlias {
            variable_id: "VariableID:1".into(),
            target_id: "VariableID:9".into(),
            missing: MissingRecord::Collection,
        };
        assert!(err.is_lookup_miss());
        assert_eq!(MissingRecord::Collection.to_string(), "collection");
        assert_eq!(MissingRecord::Variable.to_string(), "variable");
    }
}
