//! Token graph fixtures.

use serde_json::Map;
use tokenpress_graph::{
    Color, ConcreteValue, Mode, TokenGraph, Variable, VariableCollection, VariableValue,
};

/// Fluent builder for [`TokenGraph`] fixtures.
///
/// The first mode passed to [`GraphBuilder::collection`] becomes the default
/// mode; variables are appended to their collection's member list in call order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: TokenGraph,
}

impl GraphBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection with `(mode_id, mode_name)` pairs.
    #[must_use]
    pub fn collection(mut self, id: &str, name: &str, modes: &[(&str, &str)]) -> Self {
        let modes: Vec<Mode> = modes
            .iter()
            .map(|(mode_id, mode_name)| Mode {
                mode_id: (*mode_id).to_string(),
                name: (*mode_name).to_string(),
            })
            .collect();
        let default_mode_id = modes
            .first()
            .map(|mode| mode.mode_id.clone())
            .unwrap_or_default();
        self.graph.variable_collections.insert(
            id.to_string(),
            VariableCollection {
                id: id.to_string(),
                name: name.to_string(),
                modes,
                default_mode_id,
                remote: false,
                variable_ids: Vec::new(),
                extra: Map::new(),
            },
        );
        self
    }

    /// Override the default mode of an existing collection.
    #[must_use]
    pub fn default_mode(mut self, collection_id: &str, mode_id: &str) -> Self {
        if let Some(collection) = self.graph.variable_collections.get_mut(collection_id) {
            collection.default_mode_id = mode_id.to_string();
        }
        self
    }

    /// Flag an existing collection as remote.
    #[must_use]
    pub fn remote_collection(mut self, collection_id: &str) -> Self {
        if let Some(collection) = self.graph.variable_collections.get_mut(collection_id) {
            collection.remote = true;
        }
        self
    }

    /// Add a variable with `(mode_id, value)` pairs.
    #[must_use]
    pub fn variable(
        mut self,
        collection_id: &str,
        id: &str,
        name: &str,
        values: &[(&str, Option<VariableValue>)],
    ) -> Self {
        if let Some(collection) = self.graph.variable_collections.get_mut(collection_id) {
            collection.variable_ids.push(id.to_string());
        }
        self.graph.variables.insert(
            id.to_string(),
            Variable {
                id: id.to_string(),
                name: name.to_string(),
                variable_collection_id: collection_id.to_string(),
                values_by_mode: values
                    .iter()
                    .map(|(mode_id, value)| ((*mode_id).to_string(), value.clone()))
                    .collect(),
                remote: false,
                extra: Map::new(),
            },
        );
        self
    }

    /// Flag an existing variable as remote.
    #[must_use]
    pub fn remote_variable(mut self, id: &str) -> Self {
        if let Some(variable) = self.graph.variables.get_mut(id) {
            variable.remote = true;
        }
        self
    }

    /// List `id` as a member of a collection without adding a variable record.
    #[must_use]
    pub fn dangling_member(mut self, collection_id: &str, id: &str) -> Self {
        if let Some(collection) = self.graph.variable_collections.get_mut(collection_id) {
            collection.variable_ids.push(id.to_string());
        }
        self
    }

    /// Finish the graph.
    #[must_use]
    pub fn build(self) -> TokenGraph {
        self.graph
    }
}

/// Opaque RGB color value.
#[must_use]
pub const fn color(r: f64, g: f64, b: f64) -> Option<VariableValue> {
    Some(VariableValue::Concrete(ConcreteValue::Color(Color::rgb(r, g, b))))
}

/// RGBA color value.
#[must_use]
pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Option<VariableValue> {
    Some(VariableValue::Concrete(ConcreteValue::Color(Color::rgba(
        r, g, b, a,
    ))))
}

/// Numeric value.
#[must_use]
pub const fn number(value: f64) -> Option<VariableValue> {
    Some(VariableValue::Concrete(ConcreteValue::Number(value)))
}

/// String value.
#[must_use]
pub fn text(value: &str) -> Option<VariableValue> {
    Some(VariableValue::Concrete(ConcreteValue::String(
        value.to_string(),
    )))
}

/// Boolean value.
#[must_use]
pub const fn boolean(value: bool) -> Option<VariableValue> {
    Some(VariableValue::Concrete(ConcreteValue::Boolean(value)))
}

/// Alias to another variable.
#[must_use]
pub fn alias(id: &str) -> Option<VariableValue> {
    Some(VariableValue::alias(id))
}

/// One collection `Brand` with one mode and one blue `primary` token.
#[must_use]
pub fn brand_graph() -> TokenGraph {
    GraphBuilder::new()
        .collection("VariableCollectionId:brand", "Brand", &[("1:0", "default")])
        .variable(
            "VariableCollectionId:brand",
            "VariableID:primary",
            "primary",
            &[("1:0", color(0.0, 0.0, 1.0))],
        )
        .build()
}

/// Two-mode semantic collection aliasing into a single-mode primitive collection.
#[must_use]
pub fn themed_graph() -> TokenGraph {
    GraphBuilder::new()
        .collection("c:primitive", "Primitive", &[("p:0", "Value")])
        .variable(
            "c:primitive",
            "v:blue",
            "color/blue/500",
            &[("p:0", color(0.0, 0.0, 1.0))],
        )
        .variable("c:primitive", "v:space", "space/4", &[("p:0", number(16.0))])
        .variable("c:primitive", "v:step", "100", &[("p:0", number(100.0))])
        .collection("c:semantic", "Semantic Color", &[("s:light", "Light"), ("s:dark", "Dark")])
        .variable(
            "c:semantic",
            "v:accent",
            "accent",
            &[("s:light", alias("v:blue")), ("s:dark", rgba(1.0, 1.0, 1.0, 0.5))],
        )
        .variable(
            "c:semantic",
            "v:label",
            "label/font",
            &[("s:light", text("Inter")), ("s:dark", None)],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_links_members_and_defaults() {
        let graph = GraphBuilder::new()
            .collection("c", "Colors", &[("m1", "Light"), ("m2", "Dark")])
            .default_mode("c", "m2")
            .variable("c", "v", "primary", &[("m1", number(1.0))])
            .dangling_member("c", "ghost")
            .remote_variable("v")
            .build();

        let collection = graph.collection("c");
        assert_eq!(
            collection.map(|c| c.default_mode_id.as_str()),
            Some("m2")
        );
        assert_eq!(
            collection.map(|c| c.variable_ids.clone()),
            Some(vec!["v".to_string(), "ghost".to_string()])
        );
        assert!(graph.variable("ghost").is_none());
        assert!(graph.variable("v").is_some_and(|v| v.remote));
    }

    #[test]
    fn brand_graph_has_single_mode() {
        let graph = brand_graph();
        assert_eq!(graph.collection_count(), 1);
        assert!(graph.collections().all(|c| !c.has_multiple_modes()));
    }
}
