use serde::{Deserialize, Serialize};

use super::node_id::NodeId;

/// Node - one advancement entry in a snapshot
///
/// The parent is held as a lookup key into the owning `Graph`, never as a
/// reference, so a node can name a parent the snapshot does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the snapshot
    pub id: NodeId,

    /// Optional parent id (None for roots)
    pub parent_id: Option<NodeId>,

    /// True if the effective definition comes from the trusted built-in source
    pub origin_is_builtin: bool,
}

impl Node {
    /// Create a root node
    pub fn new(id: NodeId, origin_is_builtin: bool) -> Self {
        Self {
            id,
            parent_id: None,
            origin_is_builtin,
        }
    }

    /// Builder-style parent assignment
    pub fn with_parent(mut self, parent_id: NodeId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Nominal group of this node's id
    pub fn group(&self) -> &str {
        self.id.group()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Native group and a built-in effective origin
    pub fn is_native_builtin(&self) -> bool {
        self.id.is_native() && self.origin_is_builtin
    }
}
