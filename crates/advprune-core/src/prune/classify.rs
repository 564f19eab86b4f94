use crate::model::{Graph, RuleSet};

use super::protection::{ProtectedSet, ProtectionReason};
use super::removal::{RemovalReason, RemovalSet};

/// First pass: sort every node into protected or provisionally removed
///
/// Precedence, highest first:
/// 1. `keep_ids`, then `keep_groups`
/// 2. native group with a built-in origin (remove rules do not apply)
/// 3. native group shadowed by an override
/// 4. any external group
pub(crate) fn classify(graph: &Graph, rules: &RuleSet) -> (RemovalSet, ProtectedSet) {
    let mut removals = RemovalSet::new();
    let mut protected = ProtectedSet::new();

    for id in graph.sorted_ids() {
        if rules.keep_ids().contains(id) {
            protected.insert(id.clone(), ProtectionReason::KeepId);
            continue;
        }
        if rules.keep_groups().contains(id.group()) {
            protected.insert(id.clone(), ProtectionReason::KeepGroup);
            continue;
        }

        let explicit_remove = rules.is_explicitly_removed(id);

        if id.is_native() {
            let builtin = graph.get(id).map(|n| n.origin_is_builtin).unwrap_or(true);
            if builtin {
                if explicit_remove {
                    tracing::debug!(node_id = %id, "remove rule ignored for built-in node");
                }
                protected.insert(id.clone(), ProtectionReason::NativeBuiltin);
                continue;
            }
            let reason = if explicit_remove {
                RemovalReason::ExplicitRemove
            } else {
                RemovalReason::OverriddenNative
            };
            removals.insert(id.clone(), reason);
            continue;
        }

        let reason = if explicit_remove {
            RemovalReason::ExplicitRemove
        } else {
            RemovalReason::ExternalDefault
        };
        removals.insert(id.clone(), reason);
    }

    (removals, protected)
}
