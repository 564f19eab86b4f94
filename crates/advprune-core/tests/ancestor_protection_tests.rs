/// Ancestor protection: keeping a deep node keeps its whole parent chain
mod common;

use advprune_core::prune::ProtectionReason;
use advprune_core::{compute_plan, RuleSet};
use common::{graph, id, node, removed};

fn questline() -> advprune_core::Graph {
    // moda:root -> moda:act1 -> moda:act1/boss
    //                        -> moda:act1/side
    // moda:other
    graph(vec![
        node("moda:root", None, false),
        node("moda:act1", Some("moda:root"), false),
        node("moda:act1/boss", Some("moda:act1"), false),
        node("moda:act1/side", Some("moda:act1"), false),
        node("moda:other", None, false),
    ])
}

#[test]
fn test_deep_keep_protects_chain_to_root() {
    // GIVEN a kept leaf deep in an external questline
    let rules = RuleSet::default().with_keep_id(id("moda:act1/boss"));

    // WHEN computing the plan
    let plan = compute_plan(&questline(), &rules);

    // THEN the chain to the root survives, siblings and unrelated trees do not
    assert_eq!(removed(&plan.removals), vec!["moda:act1/side", "moda:other"]);
    assert_eq!(plan.rescued_ancestors, 2);
    assert_eq!(
        plan.protected.reason(&id("moda:act1")),
        Some(&ProtectionReason::Ancestor {
            of: id("moda:act1/boss")
        })
    );
}

#[test]
fn test_disabled_leaves_kept_node_as_new_root() {
    // GIVEN the same keep with ancestor protection switched off
    let rules = RuleSet::default()
        .with_keep_id(id("moda:act1/boss"))
        .with_protect_ancestors(false);

    // WHEN computing the plan
    let plan = compute_plan(&questline(), &rules);

    // THEN only the kept node survives
    assert_eq!(plan.removals.len(), 4);
    assert!(!plan.removals.contains(&id("moda:act1/boss")));
    assert_eq!(plan.rescued_ancestors, 0);
}

#[test]
fn test_group_keep_protects_ancestors_in_other_groups() {
    // GIVEN an addon group hanging under another mod's tree
    let graph = graph(vec![
        node("moda:root", None, false),
        node("moda:mid", Some("moda:root"), false),
        node("addon:extra", Some("moda:mid"), false),
        node("addon:extra/more", Some("addon:extra"), false),
    ]);
    let rules = RuleSet::default().with_keep_group("addon");

    // WHEN computing the plan
    let plan = compute_plan(&graph, &rules);

    // THEN the host mod's chain survives to carry the kept addon
    assert!(plan.removals.is_empty());
}

#[test]
fn test_explicit_remove_on_ancestor_is_overridden() {
    // GIVEN an ancestor of a kept node that is also named for removal
    let rules = RuleSet::default()
        .with_keep_id(id("moda:act1/boss"))
        .with_remove_id(id("moda:root"));

    // WHEN computing the plan
    let plan = compute_plan(&questline(), &rules);

    // THEN protection added by the expansion wins
    assert!(!plan.removals.contains(&id("moda:root")));
}

#[test]
fn test_overlapping_chains_walked_once() {
    // GIVEN two kept leaves sharing ancestors
    let rules = RuleSet::default()
        .with_keep_id(id("moda:act1/boss"))
        .with_keep_id(id("moda:act1/side"));

    // WHEN computing the plan
    let plan = compute_plan(&questline(), &rules);

    // THEN shared ancestors are rescued once
    assert_eq!(removed(&plan.removals), vec!["moda:other"]);
    assert_eq!(plan.rescued_ancestors, 2);
}
