//! In-memory host
//!
//! Stands in for a running host: holds the advancement set, answers
//! resource lookups from a fixed table, and records what a pass did to it.

use std::collections::{BTreeMap, BTreeSet};

use advprune_core::errors::{ExError, PruneError};
use advprune_core::{AdvancementRegistry, HostNode, NodeId, ResourcePath, ResourceResolver};

use crate::errors::Result;
use crate::snapshot_file::SnapshotV0;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    nodes: Vec<HostNode>,
    resources: BTreeMap<String, String>,
    unresolvable: BTreeSet<String>,
    removed: Vec<NodeId>,
    batches: usize,
    notifications: usize,
}

impl InMemoryRegistry {
    pub fn new(nodes: Vec<HostNode>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    /// Host described by a parsed snapshot fixture
    ///
    /// # Errors
    ///
    /// Returns an `InvalidNodeId` error if a node or parent id does not parse.
    pub fn from_snapshot(snapshot: &SnapshotV0) -> Result<Self> {
        let mut nodes = Vec::with_capacity(snapshot.nodes.len());
        for node in &snapshot.nodes {
            let id = NodeId::parse(&node.id).map_err(ExError::from)?;
            let parent = node
                .parent
                .as_deref()
                .map(NodeId::parse)
                .transpose()
                .map_err(ExError::from)?;
            nodes.push(HostNode::new(id, parent));
        }

        Ok(Self {
            nodes,
            resources: snapshot.resources.clone(),
            unresolvable: snapshot.unresolvable.iter().cloned().collect(),
            ..Self::default()
        })
    }

    /// Answer lookups of `resource` (`namespace:path`) with `pack`
    pub fn with_resource(mut self, resource: impl Into<String>, pack: impl Into<String>) -> Self {
        self.resources.insert(resource.into(), pack.into());
        self
    }

    /// Make lookups of `resource` fail
    pub fn with_unresolvable(mut self, resource: impl Into<String>) -> Self {
        self.unresolvable.insert(resource.into());
        self
    }

    /// Ids removed so far, in removal order
    pub fn removed(&self) -> &[NodeId] {
        &self.removed
    }

    /// Number of `remove_batch` calls
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Number of `notify_dependents` calls
    pub fn notifications(&self) -> usize {
        self.notifications
    }

    /// Ids still present
    pub fn remaining(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(|n| &n.id).collect()
    }
}

impl AdvancementRegistry for InMemoryRegistry {
    fn nodes(&self) -> advprune_core::Result<Vec<HostNode>> {
        Ok(self.nodes.clone())
    }

    fn remove_batch(&mut self, ids: &[NodeId]) -> advprune_core::Result<()> {
        let doomed: BTreeSet<&NodeId> = ids.iter().collect();
        self.nodes.retain(|n| !doomed.contains(&n.id));
        self.removed.extend_from_slice(ids);
        self.batches += 1;
        Ok(())
    }

    fn notify_dependents(&mut self) -> advprune_core::Result<()> {
        self.notifications += 1;
        Ok(())
    }
}

impl ResourceResolver for InMemoryRegistry {
    fn resolve_source(&self, resource: &ResourcePath) -> advprune_core::Result<Option<String>> {
        let key = resource.to_string();
        if self.unresolvable.contains(&key) {
            return Err(PruneError::ResolutionFailed {
                resource: key,
                message: "resource lookup failed".to_string(),
            });
        }
        Ok(self.resources.get(&key).cloned())
    }
}
