//! Token graph model mirroring the design tool's local-variables export.
//!
//! # Design
//! - Collections and variables keep the export's key order (`IndexMap`) so output
//!   ordering follows the source file.
//! - Fields the pipeline does not read are carried in `extra` and written back
//!   unchanged.
//! - A `null` value for a mode decodes to `None`, which callers treat as "skip".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GraphError, Result};
use crate::value::VariableValue;

/// Collections and variables of one design file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGraph {
    /// Collections keyed by id.
    #[serde(default)]
    pub variable_collections: IndexMap<String, VariableCollection>,
    /// Variables keyed by id.
    #[serde(default)]
    pub variables: IndexMap<String, Variable>,
}

impl TokenGraph {
    /// Decode a graph from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] when the text is not a valid graph document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| GraphError::Decode { source })
    }

    /// Encode the graph as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] when serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| GraphError::Encode { source })
    }

    /// Look up a collection by id.
    #[must_use]
    pub fn collection(&self, id: &str) -> Option<&VariableCollection> {
        self.variable_collections.get(id)
    }

    /// Look up a variable by id.
    #[must_use]
    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.get(id)
    }

    /// Collections in declared order.
    pub fn collections(&self) -> impl Iterator<Item = &VariableCollection> {
        self.variable_collections.values()
    }

    /// Number of collections.
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.variable_collections.len()
    }

    /// Number of variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

/// Named group of variables sharing a set of modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    /// Opaque collection id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Modes in declared order.
    #[serde(default)]
    pub modes: Vec<Mode>,
    /// Id of the default mode.
    pub default_mode_id: String,
    /// Whether the collection comes from a linked library.
    #[serde(default)]
    pub remote: bool,
    /// Member variable ids in declared order.
    #[serde(default)]
    pub variable_ids: Vec<String>,
    /// Fields not interpreted by the pipeline.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VariableCollection {
    /// Whether output names need a mode segment.
    #[must_use]
    pub const fn has_multiple_modes(&self) -> bool {
        self.modes.len() > 1
    }

    /// Look up a mode by id.
    #[must_use]
    pub fn mode(&self, mode_id: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.mode_id == mode_id)
    }

    /// The default mode, when it is listed.
    #[must_use]
    pub fn default_mode(&self) -> Option<&Mode> {
        self.mode(&self.default_mode_id)
    }

    /// Whether `mode_id` is the default mode.
    #[must_use]
    pub fn is_default_mode(&self, mode_id: &str) -> bool {
        self.default_mode_id == mode_id
    }
}

/// Variant axis of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    /// Opaque mode id.
    pub mode_id: String,
    /// Display name.
    pub name: String,
}

/// Named design value with one value per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Opaque variable id.
    pub id: String,
    /// Display name, possibly with `/` group separators.
    pub name: String,
    /// Owning collection id.
    pub variable_collection_id: String,
    /// Values keyed by mode id.
    #[serde(default)]
    pub values_by_mode: IndexMap<String, Option<VariableValue>>,
    /// Whether the variable comes from a linked library.
    #[serde(default)]
    pub remote: bool,
    /// Fields not interpreted by the pipeline.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variable {
    /// Value stored for `mode_id`, if any.
    #[must_use]
    pub fn value_for(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id).and_then(Option::as_ref)
    }
}

/// Envelope returned by the local-variables endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalVariablesResponse {
    /// HTTP-like status echoed in the body.
    #[serde(default)]
    pub status: Option<u16>,
    /// Error flag set by the API.
    #[serde(default)]
    pub error: bool,
    /// Error message when `error` is set.
    #[serde(default)]
    pub message: Option<String>,
    /// The token graph.
    #[serde(default)]
    pub meta: TokenGraph,
}

impl LocalVariablesResponse {
    /// Whether the body reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, Some(200)) && !self.error
    }
}
