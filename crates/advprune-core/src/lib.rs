//! advprune Core - rule-based pruning kernel for advancement forests
//!
//! This crate decides which advancement nodes survive a filtering pass
//! while keeping the survivors structurally consistent:
//! - Node, Graph and RuleSet models with namespaced ids
//! - Snapshot builder resolving each native node's effective origin
//! - Three-pass pruning engine (classification, ancestor protection,
//!   orphan closure)
//! - Structural invariant checks
//! - Error taxonomy and structured logging facility
//!
//! Everything here is synchronous and free of shared state; hosts wire it
//! to their lifecycle events through the traits in [`snapshot::registry`].

pub mod errors;
pub mod invariants;
pub mod logging_facility;
pub mod model;
pub mod prune;
pub mod snapshot;
pub mod traversal;

#[doc(hidden)]
pub use advprune_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PruneError, Result};
pub use model::{Graph, Node, NodeId, RuleSet, NATIVE_GROUP};
pub use prune::{compute_plan, compute_removals, PrunePlan, RemovalReason, RemovalSet};
pub use snapshot::{build_graph, AdvancementRegistry, HostNode, ResourcePath, ResourceResolver};
