use advprune_core::logging_facility::test_capture::{CapturedEvent, TestCapture};
use advprune_core::{HostNode, NodeId};
use advprune_core_types::schema::FIELD_REQUEST_ID;
use advprune_core_types::RequestId;
use advprune_store::{InMemoryRegistry, RuleStore, RulesFile, TomlRuleStore};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn id(text: &str) -> NodeId {
    NodeId::parse(text).expect("test id should parse")
}

/// A small modded world:
///
/// minecraft:story/root (vanilla)
/// ├── minecraft:story/mine_stone (overridden by a data pack)
/// │   └── minecraft:story/upgrade_tools (vanilla)
/// └── moda:quests/root
///     └── moda:quests/first
#[allow(dead_code)]
pub fn modded_host() -> InMemoryRegistry {
    InMemoryRegistry::new(vec![
        HostNode::new(id("minecraft:story/root"), None),
        HostNode::new(id("minecraft:story/mine_stone"), Some(id("minecraft:story/root"))),
        HostNode::new(
            id("minecraft:story/upgrade_tools"),
            Some(id("minecraft:story/mine_stone")),
        ),
        HostNode::new(id("moda:quests/root"), Some(id("minecraft:story/root"))),
        HostNode::new(id("moda:quests/first"), Some(id("moda:quests/root"))),
    ])
    .with_resource("minecraft:advancements/story/root.json", "vanilla")
    .with_resource("minecraft:advancements/story/mine_stone.json", "file/harder_stone.zip")
    .with_resource("minecraft:advancements/story/upgrade_tools.json", "vanilla")
}

/// Rule store in a scratch directory, pre-filled with `rules`
#[allow(dead_code)]
pub fn store_with(rules: &RulesFile) -> (TempDir, TomlRuleStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = TomlRuleStore::new(dir.path());
    store.save(rules).expect("rules should save");
    (dir, store)
}

/// Captured events of one pass, found by its request id
#[allow(dead_code)]
pub fn events_of(capture: &TestCapture, request_id: &RequestId) -> Vec<CapturedEvent> {
    capture
        .events()
        .into_iter()
        .filter(|e| e.field(FIELD_REQUEST_ID) == Some(request_id.as_str()))
        .collect()
}
