//! Snapshot parser with validation
//!
//! Parses YAML and validates schema version, id syntax and id uniqueness

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use advprune_core::NodeId;

use crate::errors::{snapshot_validation, Result};
use crate::snapshot_file::format_v0::SnapshotV0;

/// Parse a snapshot file from a path
///
/// # Errors
///
/// Returns an `InvalidInput` error if the file cannot be read or fails
/// validation.
pub fn parse_snapshot_file(path: &Path) -> Result<SnapshotV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| snapshot_validation(&format!("Failed to read snapshot file: {}", e)))?;

    parse_snapshot_str(&content)
}

/// Parse a snapshot from a string
///
/// # Errors
///
/// Returns an `InvalidInput` error for malformed YAML or a snapshot that
/// fails validation.
pub fn parse_snapshot_str(content: &str) -> Result<SnapshotV0> {
    let snapshot: SnapshotV0 = serde_yaml::from_str(content)
        .map_err(|e| snapshot_validation(&format!("YAML parse error: {}", e)))?;

    validate_snapshot(&snapshot)?;

    Ok(snapshot)
}

fn validate_snapshot(snapshot: &SnapshotV0) -> Result<()> {
    if snapshot.schema_version != 0 {
        return Err(snapshot_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            snapshot.schema_version
        )));
    }

    let mut seen = HashSet::new();
    for node in &snapshot.nodes {
        let id = parse_id(&node.id, "node")?;
        if !seen.insert(id) {
            return Err(snapshot_validation(&format!("Duplicate node id {}", node.id)));
        }
        if let Some(parent) = &node.parent {
            parse_id(parent, "parent")?;
        }
    }

    for resource in snapshot.resources.keys().chain(&snapshot.unresolvable) {
        if !resource.contains(':') {
            return Err(snapshot_validation(&format!(
                "Resource id {} must be namespace:path",
                resource
            )));
        }
    }

    Ok(())
}

fn parse_id(raw: &str, what: &str) -> Result<NodeId> {
    NodeId::parse(raw)
        .map_err(|e| snapshot_validation(&format!("Invalid {} id {:?}: {}", what, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_snapshot() {
        let yaml = r#"
schema_version: 0
nodes:
  - id: minecraft:story/root
  - id: moda:quest
    parent: minecraft:story/root
resources:
  minecraft:advancements/story/root.json: vanilla
"#;

        let snapshot = parse_snapshot_str(yaml).unwrap();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes[1].parent.as_deref(), Some("minecraft:story/root"));
        assert!(snapshot.unresolvable.is_empty());
    }

    #[test]
    fn test_reject_invalid_schema_version() {
        let err = parse_snapshot_str("schema_version: 99\nnodes: []\n").unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_reject_duplicate_node() {
        let yaml = r#"
schema_version: 0
nodes:
  - id: moda:quest
  - id: moda:quest
"#;
        let err = parse_snapshot_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate node id"));
    }

    #[test]
    fn test_reject_bad_parent_id() {
        let yaml = r#"
schema_version: 0
nodes:
  - id: moda:quest
    parent: "Bad Parent"
"#;
        let err = parse_snapshot_str(yaml).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_INPUT");
    }
}
