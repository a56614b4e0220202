//! Pruning of definitions that come from linked libraries.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::model::TokenGraph;

/// Drop remote collections, remote variables, and variables owned by a dropped
/// collection.
#[must_use]
pub fn remove_remote_definitions(graph: TokenGraph) -> TokenGraph {
    let TokenGraph {
        variable_collections,
        variables,
    } = graph;

    let mut removed: HashSet<String> = HashSet::new();
    let variable_collections = variable_collections
        .into_iter()
        .filter(|(_, collection)| {
            if collection.remote {
                removed.insert(collection.id.clone());
                return false;
            }
            true
        })
        .collect();

    let before = variables.len();
    let variables: IndexMap<_, _> = variables
        .into_iter()
        .filter(|(_, variable)| {
            !variable.remote && !removed.contains(&variable.variable_collection_id)
        })
        .collect();

    debug!(
        removed_collections = removed.len(),
        removed_variables = before - variables.len(),
        "pruned remote definitions"
    );

    TokenGraph {
        variable_collections,
        variables,
    }
}
