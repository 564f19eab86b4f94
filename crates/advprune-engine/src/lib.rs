//! advprune Engine - lifecycle orchestration
//!
//! Wires the pruning kernel to host lifecycle events: load the rules, build
//! a snapshot, compute the plan and apply it as one batch.

pub mod lifecycle;
pub mod report;

pub use lifecycle::{LifecycleEvent, PassOutcome, Pruner};
pub use report::PassReport;
