//! Host collaborator contracts
//!
//! The kernel never talks to a host directly. Hosts (or test doubles)
//! implement these traits and hand them to the snapshot builder and the
//! lifecycle glue.

use std::fmt;

use crate::errors::Result;
use crate::model::NodeId;

/// One advancement as the host reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
}

impl HostNode {
    pub fn new(id: NodeId, parent: Option<NodeId>) -> Self {
        Self { id, parent }
    }
}

/// Namespaced resource location inside the host's data packs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath {
    pub namespace: String,
    pub path: String,
}

impl ResourcePath {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Live advancement registry of the host
pub trait AdvancementRegistry {
    /// Enumerate every advancement currently loaded
    ///
    /// # Errors
    ///
    /// Returns `Registry` if the host cannot produce its node set.
    fn nodes(&self) -> Result<Vec<HostNode>>;

    /// Delete a batch of ids in one operation
    ///
    /// # Errors
    ///
    /// Returns `Registry` if the host rejects the batch.
    fn remove_batch(&mut self, ids: &[NodeId]) -> Result<()>;

    /// Tell interested observers (connected players, progress trackers)
    /// that the advancement set changed
    ///
    /// # Errors
    ///
    /// Returns `Registry` if notification fails.
    fn notify_dependents(&mut self) -> Result<()>;
}

/// Lookup of which pack supplies the effective copy of a resource
pub trait ResourceResolver {
    /// Identifier of the pack providing `resource`, or `None` if no pack does
    ///
    /// # Errors
    ///
    /// Returns `ResolutionFailed` when the lookup itself breaks. Callers
    /// treat that the same as an unresolved resource.
    fn resolve_source(&self, resource: &ResourcePath) -> Result<Option<String>>;
}
