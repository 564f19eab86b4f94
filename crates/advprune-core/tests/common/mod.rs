use advprune_core::{Graph, Node, NodeId, RemovalSet};

/// Parse an id, panicking on bad test input
#[allow(dead_code)]
pub fn id(text: &str) -> NodeId {
    NodeId::parse(text).expect("test id should parse")
}

/// Build a node from text ids
#[allow(dead_code)]
pub fn node(text: &str, parent: Option<&str>, builtin: bool) -> Node {
    let mut node = Node::new(id(text), builtin);
    node.parent_id = parent.map(id);
    node
}

/// Build a graph, panicking on duplicate ids
#[allow(dead_code)]
pub fn graph(nodes: Vec<Node>) -> Graph {
    Graph::from_nodes(nodes).expect("test graph should build")
}

/// The small forest used by the reference scenarios:
///
/// minecraft:root (built-in)
/// ├── minecraft:root/child (built-in)
/// └── moda:quest
#[allow(dead_code)]
pub fn reference_graph() -> Graph {
    graph(reference_nodes())
}

#[allow(dead_code)]
pub fn reference_nodes() -> Vec<Node> {
    vec![
        node("minecraft:root", None, true),
        node("minecraft:root/child", Some("minecraft:root"), true),
        node("moda:quest", None, false).with_parent(id("minecraft:root")),
    ]
}

/// Sorted textual ids of a removal set
#[allow(dead_code)]
pub fn removed(set: &RemovalSet) -> Vec<String> {
    set.ids().map(ToString::to_string).collect()
}
