//! Summary of a completed filtering pass

use advprune_core::NodeId;
use advprune_core_types::RequestId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub request_id: RequestId,
    /// `startup` or `reload`
    pub trigger: &'static str,
    pub started_at: DateTime<Utc>,
    /// Nodes in the snapshot the pass worked on
    pub node_count: usize,
    /// Removed ids, sorted
    pub removed: Vec<NodeId>,
    /// Digest of the removal set, stable across identical passes
    pub removal_digest: String,
    pub protected_count: usize,
    pub rescued_ancestors: usize,
    pub closure_scans: usize,
    pub duration_ms: u64,
}

impl PassReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Nodes left in the host after the pass
    pub fn survivor_count(&self) -> usize {
        self.node_count - self.removed.len()
    }
}
