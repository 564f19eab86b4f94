use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::NodeId;

/// Why a node ended up in the removal set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RemovalReason {
    /// Named by `remove_ids` or `remove_groups`
    ExplicitRemove,
    /// External group with no keep rule
    ExternalDefault,
    /// Native id whose effective definition comes from an override
    OverriddenNative,
    /// Parent was removed
    Orphaned { parent: NodeId },
}

/// Ids to delete from the host, applied as one batch
///
/// Iteration order is sorted by id. The reason recorded for an id is the
/// first one that put it in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalSet {
    entries: BTreeMap<NodeId, RemovalReason>,
}

impl RemovalSet {
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

    pub fn reason(&self, id: &NodeId) -> Option<&RemovalReason> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &RemovalReason)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.keys()
    }

    /// Consume into a sorted id list
    pub fn into_ids(self) -> Vec<NodeId> {
        self.entries.into_keys().collect()
    }

    /// SHA-256 over the sorted id list (canonical JSON), hex encoded
    ///
    /// Two passes over the same snapshot and rules produce the same digest.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if JSON encoding fails.
    pub fn digest(&self) -> Result<String> {
        let ids: Vec<String> = self.entries.keys().map(ToString::to_string).collect();
        let canonical = serde_json::to_string(&ids)?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    /// Returns false if the id was already present
    pub(crate) fn insert(&mut self, id: NodeId, reason: RemovalReason) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, reason);
        true
    }

    pub(crate) fn remove(&mut self, id: &NodeId) -> Option<RemovalReason> {
        self.entries.remove(id)
    }
}
