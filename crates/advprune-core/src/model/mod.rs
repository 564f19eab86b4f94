pub mod graph;
pub mod node;
pub mod node_id;
pub mod rules;

pub use graph::Graph;
pub use node::Node;
pub use node_id::{NodeId, NATIVE_GROUP};
pub use rules::RuleSet;
