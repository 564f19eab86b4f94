//! Snapshot fixtures
//!
//! A YAML description of a host's advancement set, used to run passes
//! from the command line and in tests.

pub mod format_v0;
pub mod parser;

pub use format_v0::{SnapshotNode, SnapshotV0};
pub use parser::{parse_snapshot_file, parse_snapshot_str};
