use crate::errors::{PruneError, Result};
use crate::invariants::{find_cycles, find_missing_parents};
use crate::model::{Graph, Node};

use super::origin::{resolve_origin, OriginResolution};
use super::registry::{AdvancementRegistry, ResourceResolver};

/// Build a fresh graph from the host's current advancement set
///
/// Native nodes get their `origin_is_builtin` flag from [`resolve_origin`],
/// failing open when the lookup cannot decide. External nodes are never
/// built-in. Read-only against the host.
///
/// # Errors
///
/// * `Registry` - the host could not enumerate its nodes
/// * `DuplicateNode` - the host reported the same id twice
/// * `CycleDetected` - a parent chain loops
pub fn build_graph<G, R>(registry: &G, resolver: &R) -> Result<Graph>
where
    G: AdvancementRegistry + ?Sized,
    R: ResourceResolver + ?Sized,
{
    let host_nodes = registry.nodes()?;

    let mut graph = Graph::new();
    let (mut builtin, mut overrides, mut unresolved) = (0usize, 0usize, 0usize);

    for host_node in host_nodes {
        let origin_is_builtin = if host_node.id.is_native() {
            let origin = resolve_origin(resolver, &host_node.id);
            match &origin {
                OriginResolution::ResolvedBuiltin { .. } => builtin += 1,
                OriginResolution::ResolvedOverride { source } => {
                    tracing::debug!(node_id = %host_node.id, source, "native advancement is overridden");
                    overrides += 1;
                }
                OriginResolution::Unresolved => unresolved += 1,
            }
            origin.is_builtin()
        } else {
            false
        };

        graph.insert(Node {
            id: host_node.id,
            parent_id: host_node.parent,
            origin_is_builtin,
        })?;
    }

    if let Some(first) = find_cycles(&graph).into_iter().next() {
        return Err(PruneError::CycleDetected {
            node_id: first.to_string(),
        });
    }

    for (child, parent) in find_missing_parents(&graph) {
        tracing::warn!(node_id = %child, parent = %parent, "parent not in snapshot, treating node as a root");
    }

    tracing::debug!(
        node_count = graph.len(),
        builtin,
        overrides,
        unresolved,
        "snapshot built"
    );

    Ok(graph)
}
