use std::collections::HashMap;

use crate::errors::{PruneError, Result};

use super::node::Node;
use super::node_id::NodeId;

/// Snapshot of every node the host knows about, keyed by id
///
/// Built fresh for each filtering pass and never mutated while the engine
/// runs over it. Not thread-safe by itself; share behind `&` only.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Build a graph from a node collection
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNode` if two nodes share an id.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert(node)?;
        }
        Ok(graph)
    }

    /// Insert a node
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNode` if the id is already present.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(PruneError::DuplicateNode {
                node_id: node.id.to_string(),
            });
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Get a node by id
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id is not in the snapshot.
    pub fn get(&self, id: &NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| PruneError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Declared parent of `id`, if the node exists and is not a root
    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.nodes.get(id).and_then(|n| n.parent_id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All ids in sorted order
    pub fn sorted_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.nodes.keys().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut graph = Graph::new();
        graph
            .insert(Node::new(id("minecraft:story/root"), true))
            .unwrap();
        graph
            .insert(Node::new(id("moda:quest"), false).with_parent(id("minecraft:story/root")))
            .unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.get(&id("moda:quest")).unwrap().parent_id.is_some());
        assert_eq!(
            graph.parent_of(&id("moda:quest")),
            Some(&id("minecraft:story/root"))
        );
        assert_eq!(graph.parent_of(&id("minecraft:story/root")), None);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let result = Graph::from_nodes([
            Node::new(id("moda:quest"), false),
            Node::new(id("moda:quest"), false),
        ]);
        assert!(matches!(result, Err(PruneError::DuplicateNode { .. })));
    }

    #[test]
    fn test_get_missing_node() {
        let graph = Graph::new();
        assert!(matches!(
            graph.get(&id("moda:missing")),
            Err(PruneError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_sorted_ids() {
        let graph = Graph::from_nodes([
            Node::new(id("modb:a"), false),
            Node::new(id("minecraft:a"), true),
            Node::new(id("moda:a"), false),
        ])
        .unwrap();

        let ids: Vec<String> = graph.sorted_ids().iter().map(|i| i.to_string()).collect();
        assert_eq!(ids, vec!["minecraft:a", "moda:a", "modb:a"]);
    }
}
