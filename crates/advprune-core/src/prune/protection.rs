use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Why a node is exempt from removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProtectionReason {
    /// Named in `keep_ids`
    KeepId,
    /// Group listed in `keep_groups`
    KeepGroup,
    /// Native group with a built-in effective origin
    NativeBuiltin,
    /// On the parent chain of an explicitly kept node
    Ancestor { of: NodeId },
}

impl ProtectionReason {
    /// Protection granted directly by a keep rule
    pub fn is_explicit_keep(&self) -> bool {
        matches!(self, ProtectionReason::KeepId | ProtectionReason::KeepGroup)
    }
}

/// Ids exempt from removal, with the reason each one is exempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedSet {
    entries: BTreeMap<NodeId, ProtectionReason>,
}

impl ProtectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reason(&self, id: &NodeId) -> Option<&ProtectionReason> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &ProtectionReason)> {
        self.entries.iter()
    }

    /// Explicitly kept ids, sorted
    pub fn explicit_keeps(&self) -> Vec<&NodeId> {
        self.entries
            .iter()
            .filter(|(_, reason)| reason.is_explicit_keep())
            .map(|(id, _)| id)
            .collect()
    }

    /// Keeps an existing reason; returns false if the id was already present
    pub(crate) fn insert(&mut self, id: NodeId, reason: ProtectionReason) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, reason);
        true
    }
}
