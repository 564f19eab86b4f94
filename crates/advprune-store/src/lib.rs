//! advprune Store - rule persistence and snapshot fixtures
//!
//! Provides:
//! - TOML rules file with commented defaults, behind the `RuleStore` trait
//! - YAML snapshot fixture format and parser with validation
//! - In-memory host registry for driving passes outside a running host

pub mod errors;
pub mod registry;
pub mod rules_store;
pub mod snapshot_file;

// Re-export key types
pub use errors::Result;
pub use registry::InMemoryRegistry;
pub use rules_store::{RuleStore, RulesFile, TomlRuleStore, RULES_FILE_NAME};
pub use snapshot_file::{parse_snapshot_file, parse_snapshot_str, SnapshotV0};
