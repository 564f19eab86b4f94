//! CLI integration tests
//!
//! Run the built binary against the demo snapshot fixture with a scratch
//! config directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn demo_snapshot() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos/modded_world.yaml")
}

fn run(config_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_advprune"))
        .env_remove("ADVPRUNE_CONFIG_DIR")
        .env_remove("ADVPRUNE_LOG_JSON")
        .env("RUST_LOG", "off")
        .args(args)
        .arg("--config-dir")
        .arg(config_dir.path())
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_prune_with_default_rules() {
    // GIVEN no rules file yet
    let config = TempDir::new().unwrap();
    let snapshot = demo_snapshot();

    // WHEN pruning the demo snapshot
    let output = run(&config, &["prune", "--snapshot", snapshot.to_str().unwrap()]);

    // THEN the pass succeeds, lists removals and writes default rules
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed 4 advancement(s)"));
    assert!(stdout.contains("  - minecraft:story/mine_stone"));
    assert!(stdout.contains("Survivors: 3"));
    assert!(config.path().join("only_vanilla_advancements.toml").exists());
}

#[test]
fn test_cli_prune_json_report() {
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("only_vanilla_advancements.toml"),
        "kept_mods = [\"moda\", \"modb\"]\n",
    )
    .unwrap();
    let snapshot = demo_snapshot();

    let output = run(
        &config,
        &["prune", "--snapshot", snapshot.to_str().unwrap(), "--json"],
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["trigger"], "startup");
    assert_eq!(report["node_count"], 7);
    assert_eq!(
        report["removed"],
        serde_json::json!(["minecraft:story/mine_stone"])
    );
}

#[test]
fn test_cli_failed_reload_skips() {
    let config = TempDir::new().unwrap();
    let snapshot = demo_snapshot();

    let output = run(
        &config,
        &[
            "prune",
            "--snapshot",
            snapshot.to_str().unwrap(),
            "--event",
            "reload",
            "--reload-failed",
        ],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Skipped"));
}

#[test]
fn test_cli_bad_snapshot_fails() {
    let config = TempDir::new().unwrap();
    let bad = config.path().join("bad.yaml");
    fs::write(&bad, "schema_version: 3\nnodes: []\n").unwrap();

    let output = run(&config, &["prune", "--snapshot", bad.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_INPUT"));
}

#[test]
fn test_cli_rules_init_then_show() {
    let config = TempDir::new().unwrap();

    let init = run(&config, &["rules", "init"]);
    assert!(init.status.success());

    let again = run(&config, &["rules", "init"]);
    assert!(String::from_utf8_lossy(&again.stdout).contains("already exists"));

    let show = run(&config, &["rules", "show"]);
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(show.status.success());
    assert!(stdout.contains("keep_parent_advancements = true"));
    assert!(stdout.contains("ancestors protected"));
}
