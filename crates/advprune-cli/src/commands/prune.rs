//! Prune command
//!
//! Usage: advprune prune --snapshot <FILE> [--event startup|reload] [--reload-failed] [--json]

use std::path::PathBuf;

use advprune_engine::{LifecycleEvent, PassOutcome, PassReport, Pruner};
use advprune_store::{parse_snapshot_file, InMemoryRegistry, TomlRuleStore};
use clap::{Args, ValueEnum};

use super::ConfigDirArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    Startup,
    Reload,
}

#[derive(Debug, Args)]
pub struct PruneArgs {
    /// Snapshot fixture (YAML, schema_version 0)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub config: ConfigDirArg,

    /// Lifecycle event to simulate
    #[arg(long, value_enum, default_value_t = EventKind::Startup)]
    pub event: EventKind,

    /// Simulate a reload that failed (only meaningful with --event reload)
    #[arg(long)]
    pub reload_failed: bool,

    /// Print the pass report as JSON
    #[arg(long)]
    pub json: bool,
}

impl PruneArgs {
    pub(crate) fn lifecycle_event(&self) -> LifecycleEvent {
        match self.event {
            EventKind::Startup => LifecycleEvent::StartupComplete,
            EventKind::Reload => LifecycleEvent::ReloadComplete {
                success: !self.reload_failed,
            },
        }
    }
}

/// Execute prune command
pub fn execute(args: PruneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = parse_snapshot_file(&args.snapshot)?;
    let mut host = InMemoryRegistry::from_snapshot(&snapshot)?;
    let pruner = Pruner::new(TomlRuleStore::new(&args.config.config_dir));

    match pruner.handle(args.lifecycle_event(), &mut host) {
        PassOutcome::Skipped => {
            println!("Skipped: reload failed, nothing to filter");
            Ok(())
        }
        PassOutcome::NoRemovals(report) | PassOutcome::Applied(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(())
        }
        PassOutcome::Failed(err) => Err(err.into()),
    }
}

fn print_report(report: &PassReport) {
    if report.removed.is_empty() {
        println!("Nothing to remove");
    } else {
        println!("Removed {} advancement(s):", report.removed_count());
        for id in &report.removed {
            println!("  - {}", id);
        }
    }
    println!("Survivors: {}", report.survivor_count());
    println!("Digest: {}", report.removal_digest);
}
