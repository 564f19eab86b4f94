use crate::model::Graph;

use super::protection::ProtectedSet;
use super::removal::{RemovalReason, RemovalSet};

/// Third pass: remove every unprotected node whose parent is removed
///
/// Rescans the whole graph until a scan adds nothing. The set only grows and
/// is bounded by the node count, so this terminates. Returns the number of
/// scans performed, including the final one that found nothing.
pub(crate) fn close_orphans(
    graph: &Graph,
    protected: &ProtectedSet,
    removals: &mut RemovalSet,
) -> usize {
    let ids = graph.sorted_ids();
    let mut scans = 0;

    loop {
        scans += 1;
        let mut changed = false;

        for id in &ids {
            if removals.contains(id) || protected.contains(id) {
                continue;
            }
            let Some(parent) = graph.parent_of(id) else {
                continue;
            };
            if removals.contains(parent) {
                removals.insert(
                    (*id).clone(),
                    RemovalReason::Orphaned {
                        parent: parent.clone(),
                    },
                );
                changed = true;
            }
        }

        if !changed {
            return scans;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeId};
    use crate::prune::protection::ProtectionReason;

    fn id(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    #[test]
    fn test_removal_cascades_down_chain() {
        // Ids sort against the parent order so one scan cannot finish the job
        let graph = Graph::from_nodes([
            Node::new(id("moda:z"), true),
            Node::new(id("moda:y"), true).with_parent(id("moda:z")),
            Node::new(id("moda:x"), true).with_parent(id("moda:y")),
        ])
        .unwrap();
        let mut removals = RemovalSet::new();
        removals.insert(id("moda:z"), RemovalReason::ExplicitRemove);

        let scans = close_orphans(&graph, &ProtectedSet::new(), &mut removals);

        assert_eq!(removals.len(), 3);
        assert_eq!(
            removals.reason(&id("moda:x")),
            Some(&RemovalReason::Orphaned { parent: id("moda:y") })
        );
        assert_eq!(scans, 3);
    }

    #[test]
    fn test_protected_child_survives_as_new_root() {
        let graph = Graph::from_nodes([
            Node::new(id("moda:parent"), false),
            Node::new(id("moda:child"), false).with_parent(id("moda:parent")),
            Node::new(id("moda:grandchild"), false).with_parent(id("moda:child")),
        ])
        .unwrap();
        let mut removals = RemovalSet::new();
        removals.insert(id("moda:parent"), RemovalReason::ExternalDefault);
        let mut protected = ProtectedSet::new();
        protected.insert(id("moda:child"), ProtectionReason::KeepId);

        close_orphans(&graph, &protected, &mut removals);

        assert!(!removals.contains(&id("moda:child")));
        assert!(!removals.contains(&id("moda:grandchild")));
    }

    #[test]
    fn test_empty_removals_single_scan() {
        let graph = Graph::from_nodes([Node::new(id("minecraft:root"), true)]).unwrap();
        let mut removals = RemovalSet::new();
        assert_eq!(close_orphans(&graph, &ProtectedSet::new(), &mut removals), 1);
        assert!(removals.is_empty());
    }
}
