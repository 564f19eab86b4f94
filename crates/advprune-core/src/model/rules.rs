//! Rule set consumed by the pruning engine
//!
//! A `RuleSet` is an immutable value interpreted once per filtering pass.
//! Editors (a settings file, an options screen) build a new value and
//! persist it; they never mutate one the engine is reading.

use std::collections::HashSet;

use super::node_id::NodeId;

/// User-configurable pruning policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    keep_groups: HashSet<String>,
    keep_ids: HashSet<NodeId>,
    remove_groups: HashSet<String>,
    remove_ids: HashSet<NodeId>,
    protect_ancestors: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            keep_groups: HashSet::new(),
            keep_ids: HashSet::new(),
            remove_groups: HashSet::new(),
            remove_ids: HashSet::new(),
            protect_ancestors: true,
        }
    }
}

impl RuleSet {
    /// Interpret raw rule entries
    ///
    /// Blank entries are skipped. Ids that fail to parse are dropped with a
    /// warning; a bad entry never fails the whole rule set.
    pub fn from_entries<G, I>(
        keep_groups: G,
        keep_ids: I,
        remove_groups: G,
        remove_ids: I,
        protect_ancestors: bool,
    ) -> Self
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            keep_groups: parse_groups(keep_groups),
            keep_ids: parse_ids("keep", keep_ids),
            remove_groups: parse_groups(remove_groups),
            remove_ids: parse_ids("remove", remove_ids),
            protect_ancestors,
        }
    }

    pub fn with_keep_group(mut self, group: impl Into<String>) -> Self {
        self.keep_groups.insert(group.into());
        self
    }

    pub fn with_keep_id(mut self, id: NodeId) -> Self {
        self.keep_ids.insert(id);
        self
    }

    pub fn with_remove_group(mut self, group: impl Into<String>) -> Self {
        self.remove_groups.insert(group.into());
        self
    }

    pub fn with_remove_id(mut self, id: NodeId) -> Self {
        self.remove_ids.insert(id);
        self
    }

    pub fn with_protect_ancestors(mut self, protect: bool) -> Self {
        self.protect_ancestors = protect;
        self
    }

    pub fn keep_groups(&self) -> &HashSet<String> {
        &self.keep_groups
    }

    pub fn keep_ids(&self) -> &HashSet<NodeId> {
        &self.keep_ids
    }

    pub fn remove_groups(&self) -> &HashSet<String> {
        &self.remove_groups
    }

    pub fn remove_ids(&self) -> &HashSet<NodeId> {
        &self.remove_ids
    }

    pub fn protect_ancestors(&self) -> bool {
        self.protect_ancestors
    }

    /// Covered by `keep_ids` or `keep_groups`
    pub fn is_explicitly_kept(&self, id: &NodeId) -> bool {
        self.keep_ids.contains(id) || self.keep_groups.contains(id.group())
    }

    /// Covered by `remove_ids` or `remove_groups`
    pub fn is_explicitly_removed(&self, id: &NodeId) -> bool {
        self.remove_ids.contains(id) || self.remove_groups.contains(id.group())
    }
}

fn parse_groups<G>(raw: G) -> HashSet<String>
where
    G: IntoIterator,
    G::Item: AsRef<str>,
{
    raw.into_iter()
        .map(|g| g.as_ref().trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

fn parse_ids<I>(list: &str, raw: I) -> HashSet<NodeId>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = HashSet::new();
    for entry in raw {
        let entry = entry.as_ref();
        if entry.trim().is_empty() {
            continue;
        }
        match NodeId::parse(entry) {
            Ok(id) => {
                out.insert(id);
            }
            Err(err) => {
                tracing::warn!(list, entry, error = %err, "dropping malformed rule entry");
            }
        }
    }
    out
}
