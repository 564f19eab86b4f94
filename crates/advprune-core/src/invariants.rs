//! Structural checks over a snapshot and a computed plan

use std::collections::{HashMap, HashSet};

use crate::model::{Graph, NodeId};
use crate::prune::PrunePlan;

/// Check if a node's parent chain loops back on itself
pub fn has_cycle(graph: &Graph, id: &NodeId) -> bool {
    let mut visited = HashSet::new();
    let mut current = Some(id);

    while let Some(node_id) = current {
        if !visited.insert(node_id) {
            return true;
        }
        current = graph.parent_of(node_id).filter(|p| graph.contains(p));
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    OnPath,
    Acyclic,
    Cyclic,
}

/// Every node that sits on, or leads into, a parent-chain cycle, sorted
///
/// Each node is walked at most once: a walk stops at the first node whose
/// verdict is already known and hands that verdict to its whole path.
pub fn find_cycles(graph: &Graph) -> Vec<NodeId> {
    let mut marks: HashMap<&NodeId, Walk> = HashMap::with_capacity(graph.len());

    for start in graph.sorted_ids() {
        if marks.contains_key(start) {
            continue;
        }

        let mut path = Vec::new();
        let mut current = Some(start);
        let verdict = loop {
            let Some(id) = current else {
                break Walk::Acyclic;
            };
            match marks.get(id) {
                Some(Walk::OnPath) => break Walk::Cyclic,
                Some(known) => break *known,
                None => {}
            }
            marks.insert(id, Walk::OnPath);
            path.push(id);
            current = graph.parent_of(id).filter(|p| graph.contains(p));
        };

        for id in path {
            marks.insert(id, verdict);
        }
    }

    let mut cyclic: Vec<NodeId> = marks
        .into_iter()
        .filter(|(_, walk)| *walk == Walk::Cyclic)
        .map(|(id, _)| id.clone())
        .collect();
    cyclic.sort();
    cyclic
}

/// Nodes naming a parent the snapshot does not contain
///
/// Returns (child_id, parent_id) tuples. The engine treats such nodes as
/// roots.
pub fn find_missing_parents(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut missing = Vec::new();
    for id in graph.sorted_ids() {
        if let Some(parent) = graph.parent_of(id) {
            if !graph.contains(parent) {
                missing.push((id.clone(), parent.clone()));
            }
        }
    }
    missing
}

/// Survivors whose parent was removed and who hold no protection
///
/// Returns (child_id, parent_id) tuples. Empty for every plan the engine
/// produces; callers use it as a post-condition check.
pub fn find_dangling_survivors(graph: &Graph, plan: &PrunePlan) -> Vec<(NodeId, NodeId)> {
    let mut dangling = Vec::new();
    for id in plan.survivors(graph) {
        if plan.protected.contains(id) {
            continue;
        }
        if let Some(parent) = graph.parent_of(id) {
            if plan.removals.contains(parent) {
                dangling.push((id.clone(), parent.clone()));
            }
        }
    }
    dangling
}
