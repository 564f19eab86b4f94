use std::collections::HashSet;

use crate::model::{Graph, NodeId, RuleSet};
use crate::traversal::ancestors;

use super::protection::{ProtectedSet, ProtectionReason};
use super::removal::RemovalSet;

/// Second pass: protect the parent chain of every explicitly kept node
///
/// No-op unless `protect_ancestors` is set. A walk stops at a root, at a
/// parent missing from the snapshot, or at a node whose own chain is already
/// covered by another walk. Built-in native nodes do not stop a walk: their
/// parents may be overrides that still need protecting.
///
/// Returns the number of nodes taken back out of the removal set.
pub(crate) fn protect_ancestors(
    graph: &Graph,
    rules: &RuleSet,
    protected: &mut ProtectedSet,
    removals: &mut RemovalSet,
) -> usize {
    if !rules.protect_ancestors() {
        return 0;
    }

    let seeds: Vec<NodeId> = protected.explicit_keeps().into_iter().cloned().collect();
    let mut walked: HashSet<NodeId> = seeds.iter().cloned().collect();
    let mut rescued = 0;

    for seed in &seeds {
        for ancestor in ancestors(graph, seed) {
            if !walked.insert(ancestor.clone()) {
                break;
            }
            protected.insert(
                ancestor.clone(),
                ProtectionReason::Ancestor { of: seed.clone() },
            );
            if removals.remove(ancestor).is_some() {
                tracing::debug!(node_id = %ancestor, kept_for = %seed, "ancestor rescued from removal");
                rescued += 1;
            }
        }
    }

    rescued
}
