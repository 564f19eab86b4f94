//! Snapshot Format v0 schema

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level snapshot file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Advancements the host reports, in enumeration order
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,

    /// Resource id (`namespace:path`) to the id of the pack supplying it
    #[serde(default)]
    pub resources: BTreeMap<String, String>,

    /// Resource ids whose lookup fails
    #[serde(default)]
    pub unresolvable: Vec<String>,
}

/// One advancement as the host reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}
