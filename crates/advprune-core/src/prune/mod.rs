//! Pruning engine
//!
//! Pure function of (graph, rules) to a removal set, computed in three
//! ordered passes:
//!
//! 1. **Classification** - keep rules, built-in native content, overrides
//!    and external groups give a provisional removal set.
//! 2. **Ancestor protection** - when enabled, the parent chain of every
//!    explicitly kept node is protected and taken back out of the set.
//! 3. **Orphan closure** - unprotected nodes whose parent is removed are
//!    removed too, repeated to a fixpoint.
//!
//! No state survives between calls; the same inputs always give the same
//! set.

mod ancestry;
mod classify;
mod closure;
pub mod protection;
pub mod removal;

use serde::Serialize;

use crate::model::{Graph, NodeId, RuleSet};

pub use protection::{ProtectedSet, ProtectionReason};
pub use removal::{RemovalReason, RemovalSet};

/// Full outcome of one engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrunePlan {
    /// Ids to delete
    pub removals: RemovalSet,
    /// Ids exempt from removal and why
    pub protected: ProtectedSet,
    /// Nodes taken back out of the removal set by ancestor protection
    pub rescued_ancestors: usize,
    /// Full graph scans the orphan closure needed
    pub closure_scans: usize,
}

impl PrunePlan {
    /// Ids that survive, sorted
    pub fn survivors<'g>(&self, graph: &'g Graph) -> Vec<&'g NodeId> {
        graph
            .sorted_ids()
            .into_iter()
            .filter(|id| !self.removals.contains(id))
            .collect()
    }
}

/// Run all three passes and keep the intermediate bookkeeping
pub fn compute_plan(graph: &Graph, rules: &RuleSet) -> PrunePlan {
    let (mut removals, mut protected) = classify::classify(graph, rules);
    let provisional = removals.len();

    let rescued_ancestors =
        ancestry::protect_ancestors(graph, rules, &mut protected, &mut removals);
    let closure_scans = closure::close_orphans(graph, &protected, &mut removals);

    tracing::debug!(
        node_count = graph.len(),
        provisional,
        rescued_ancestors,
        closure_scans,
        removed_count = removals.len(),
        protected_count = protected.len(),
        "pruning plan computed"
    );

    PrunePlan {
        removals,
        protected,
        rescued_ancestors,
        closure_scans,
    }
}

/// Ids to remove from the host for this snapshot and rule set
pub fn compute_removals(graph: &Graph, rules: &RuleSet) -> RemovalSet {
    compute_plan(graph, rules).removals
}
