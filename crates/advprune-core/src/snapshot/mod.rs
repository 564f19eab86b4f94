//! Snapshot builder
//!
//! Turns the host's live advancement set into a [`Graph`](crate::model::Graph),
//! resolving for each native node whether its effective definition still
//! comes from the built-in source.

pub mod builder;
pub mod origin;
pub mod registry;

pub use builder::build_graph;
pub use origin::{is_builtin_source, resolve_origin, OriginResolution};
pub use registry::{AdvancementRegistry, HostNode, ResourcePath, ResourceResolver};
