//! Alias chain resolution.
//!
//! # Design
//! - Each alias hop continues in the target collection's default mode; the
//!   originating mode never crosses an alias boundary.
//! - Iterative walk with a visited set of (variable, mode) pairs, so malformed
//!   graphs fail with [`GraphError::AliasCycle`] instead of looping.

use std::collections::HashSet;

use tracing::trace;

use crate::error::{GraphError, MissingRecord, Result};
use crate::model::{TokenGraph, Variable};
use crate::value::{ConcreteValue, VariableValue};

/// Resolve `variable` in `mode_id` to its terminal value.
///
/// Returns `Ok(None)` when a variable along the chain has no value for the mode
/// being read.
///
/// # Errors
///
/// Returns [`GraphError::DanglingAlias`] when an alias targets a variable or
/// collection absent from the graph, and [`GraphError::AliasCycle`] when the
/// chain revisits a (variable, mode) pair.
pub fn resolve<'g>(
    graph: &'g TokenGraph,
    variable: &'g Variable,
    mode_id: &'g str,
) -> Result<Option<&'g ConcreteValue>> {
    let mut current = variable;
    let mut mode = mode_id;
    let mut visited: HashSet<(&str, &str)> = HashSet::new();
    let mut chain: Vec<&str> = Vec::new();

    loop {
        chain.push(current.id.as_str());
        if !visited.insert((current.id.as_str(), mode)) {
            return Err(GraphError::AliasCycle {
                chain: chain.into_iter().map(str::to_string).collect(),
            });
        }

        let alias = match current.value_for(mode) {
            None => return Ok(None),
            Some(VariableValue::Concrete(value)) => return Ok(Some(value)),
            Some(VariableValue::Alias(alias)) => alias,
        };

        let target = graph
            .variable(&alias.id)
            .ok_or_else(|| GraphError::DanglingAlias {
                variable_id: current.id.clone(),
                target_id: alias.id.clone(),
                missing: MissingRecord::Variable,
            })?;
        let collection = graph
            .collection(&target.variable_collection_id)
            .ok_or_else(|| GraphError::DanglingAlias {
                variable_id: current.id.clone(),
                target_id: target.variable_collection_id.clone(),
                missing: MissingRecord::Collection,
            })?;

        trace!(
            from = %current.id,
            to = %target.id,
            mode = %collection.default_mode_id,
            "following alias"
        );
        current = target;
        mode = collection.default_mode_id.as_str();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, VariableCollection};
    use crate::value::Color;
    use indexmap::IndexMap;
    use serde_json::Map;
    use std::error::Error;
    use std::io;

    fn collection(id: &str, modes: &[&str], default: &str, members: &[&str]) -> VariableCollection {
        VariableCollection {
            id: id.to_string(),
            name: id.to_string(),
            modes: modes
                .iter()
                .map(|mode| Mode {
                    mode_id: (*mode).to_string(),
                    name: (*mode).to_string(),
                })
                .collect(),
            default_mode_id: default.to_string(),
            remote: false,
            variable_ids: members.iter().map(|id| (*id).to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn variable(id: &str, collection: &str, values: &[(&str, Option<VariableValue>)]) -> Variable {
        Variable {
            id: id.to_string(),
            name: id.to_string(),
            variable_collection_id: collection.to_string(),
            values_by_mode: values
                .iter()
                .map(|(mode, value)| ((*mode).to_string(), value.clone()))
                .collect::<IndexMap<_, _>>(),
            remote: false,
            extra: Map::new(),
        }
    }

    fn graph(collections: Vec<VariableCollection>, variables: Vec<Variable>) -> TokenGraph {
        TokenGraph {
            variable_collections: collections
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            variables: variables.into_iter().map(|v| (v.id.clone(), v)).collect(),
        }
    }

    fn number(value: f64) -> Option<VariableValue> {
        Some(VariableValue::Concrete(ConcreteValue::Number(value)))
    }

    #[test]
    fn alias_resolves_through_target_default_mode() -> std::result::Result<(), Box<dyn Error>> {
        let graph = graph(
            vec![
                collection("semantic", &["light", "dark"], "light", &["a"]),
                collection("primitive", &["light", "dark"], "light", &["b"]),
            ],
            vec![
                variable("a", "semantic", &[("dark", Some(VariableValue::alias("b")))]),
                variable("b", "primitive", &[("light", number(10.0)), ("dark", number(99.0))]),
            ],
        );
        let source = graph
            .variable("a")
            .ok_or_else(|| io::Error::other("missing a"))?;
        let resolved = resolve(&graph, source, "dark")?;
        assert_eq!(resolved, Some(&ConcreteValue::Number(10.0)));
        Ok(())
    }

    #[test]
    fn concrete_values_are_returned_unchanged() -> std::result::Result<(), Box<dyn Error>> {
        let red = ConcreteValue::Color(Color::rgb(1.0, 0.0, 0.0));
        let graph = graph(
            vec![collection("c", &["m"], "m", &["v"])],
            vec![variable("v", "c", &[("m", Some(VariableValue::Concrete(red.clone())))])],
        );
        let source = graph.variable("v").ok_or_else(|| io::Error::other("missing v"))?;
        assert_eq!(resolve(&graph, source, "m")?, Some(&red));
        Ok(())
    }

    #[test]
    fn absent_mode_value_resolves_to_none() -> std::result::Result<(), Box<dyn Error>> {
        let graph = graph(
            vec![collection("c", &["m", "n"], "m", &["v", "w"])],
            vec![
                variable("v", "c", &[("m", number(1.0)), ("n", None)]),
                variable("w", "c", &[("m", Some(VariableValue::alias("x")))]),
            ],
        );
        let v = graph.variable("v").ok_or_else(|| io::Error::other("missing v"))?;
        assert_eq!(resolve(&graph, v, "n")?, None);
        assert_eq!(resolve(&graph, v, "other")?, None);
        Ok(())
    }

    #[test]
    fn dangling_alias_reports_missing_record() -> std::result::Result<(), Box<dyn Error>> {
        let graph = graph(
            vec![collection("c", &["m"], "m", &["v", "w"])],
            vec![
                variable("v", "c", &[("m", Some(VariableValue::alias("missing")))]),
                variable("w", "c", &[("m", Some(VariableValue::alias("orphan")))]),
                variable("orphan", "gone", &[("m", number(1.0))]),
            ],
        );
        let v = graph.variable("v").ok_or_else(|| io::Error::other("missing v"))?;
        let err = resolve(&graph, v, "m").err();
        assert!(matches!(
            err,
            Some(GraphError::DanglingAlias {
                missing: MissingRecord::Variable,
                ref target_id,
                ..
            }) if target_id == "missing"
        ));

        let w = graph.variable("w").ok_or_else(|| io::Error::other("missing w"))?;
        let err = resolve(&graph, w, "m").err();
        assert!(matches!(
            err,
            Some(GraphError::DanglingAlias {
                missing: MissingRecord::Collection,
                ref target_id,
                ..
            }) if target_id == "gone"
        ));
        Ok(())
    }

    #[test]
    fn cycles_fail_fast_with_chain() -> std::result::Result<(), Box<dyn Error>> {
        let graph = graph(
            vec![collection("c", &["m"], "m", &["a", "b"])],
            vec![
                variable("a", "c", &[("m", Some(VariableValue::alias("b")))]),
                variable("b", "c", &[("m", Some(VariableValue::alias("a")))]),
            ],
        );
        let a = graph.variable("a").ok_or_else(|| io::Error::other("missing a"))?;
        match resolve(&graph, a, "m") {
            Err(GraphError::AliasCycle { chain }) => assert_eq!(chain, ["a", "b", "a"]),
            other => return Err(io::Error::other(format!("unexpected {other:?}")).into()),
        }
        Ok(())
    }
}
