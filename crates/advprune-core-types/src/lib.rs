//! Core types shared across advprune crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities of the pruning kernel and its host glue:
//!
//! - **Correlation types**: RequestId for tagging a single filtering pass
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
