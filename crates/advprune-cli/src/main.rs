//! advprune CLI
//!
//! Command-line interface for running filtering passes against snapshot
//! fixtures and managing the rules file

use advprune_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "advprune")]
#[command(about = "advprune - keep only built-in advancements plus the ones you choose", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "ADVPRUNE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a filtering pass over a snapshot fixture
    Prune(commands::prune::PruneArgs),
    /// Rules file operations
    Rules(commands::rules::RulesArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Prune(args) => commands::prune::execute(args),
        Commands::Rules(args) => commands::rules::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
