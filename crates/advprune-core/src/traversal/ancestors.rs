use std::collections::HashSet;

use crate::model::{Graph, NodeId};

/// Walk the parent chain upward, nearest parent first
///
/// The start node itself is not yielded. The walk ends at a root, at a
/// parent id the snapshot does not contain, or at the first id seen twice,
/// so a malformed cyclic snapshot cannot loop forever.
pub fn ancestors<'g>(graph: &'g Graph, start: &NodeId) -> Ancestors<'g> {
    let mut seen = HashSet::new();
    seen.insert(start.clone());
    Ancestors {
        graph,
        next: graph.parent_of(start),
        seen,
    }
}

/// Iterator returned by [`ancestors`]
pub struct Ancestors<'g> {
    graph: &'g Graph,
    next: Option<&'g NodeId>,
    seen: HashSet<NodeId>,
}

impl<'g> Iterator for Ancestors<'g> {
    type Item = &'g NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.graph.contains(current) || !self.seen.insert(current.clone()) {
            return None;
        }
        self.next = self.graph.parent_of(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn id(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    fn chain() -> Graph {
        Graph::from_nodes([
            Node::new(id("moda:a"), false),
            Node::new(id("moda:b"), false).with_parent(id("moda:a")),
            Node::new(id("moda:c"), false).with_parent(id("moda:b")),
        ])
        .unwrap()
    }

    #[test]
    fn test_root_has_no_ancestors() {
        let graph = chain();
        assert_eq!(ancestors(&graph, &id("moda:a")).count(), 0);
    }

    #[test]
    fn test_chain_nearest_first() {
        let graph = chain();
        let up: Vec<String> = ancestors(&graph, &id("moda:c"))
            .map(ToString::to_string)
            .collect();
        assert_eq!(up, vec!["moda:b", "moda:a"]);
    }

    #[test]
    fn test_stops_at_missing_parent() {
        let graph = Graph::from_nodes([
            Node::new(id("moda:b"), false).with_parent(id("moda:gone")),
            Node::new(id("moda:c"), false).with_parent(id("moda:b")),
        ])
        .unwrap();

        let up: Vec<String> = ancestors(&graph, &id("moda:c"))
            .map(ToString::to_string)
            .collect();
        assert_eq!(up, vec!["moda:b"]);
    }

    #[test]
    fn test_terminates_on_cycle() {
        let graph = Graph::from_nodes([
            Node::new(id("moda:a"), false).with_parent(id("moda:b")),
            Node::new(id("moda:b"), false).with_parent(id("moda:a")),
        ])
        .unwrap();

        assert_eq!(ancestors(&graph, &id("moda:a")).count(), 1);
    }
}
