//! Rules command
//!
//! Usage: advprune rules <init|show> [--config-dir <DIR>]

use advprune_store::{RuleStore, RulesFile, TomlRuleStore};
use clap::{Args, Subcommand};

use super::ConfigDirArg;

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// Write the default rules file
    Init(RulesInitArgs),
    /// Print the rules a pass would use
    Show(ConfigDirArg),
}

#[derive(Debug, Args)]
pub struct RulesInitArgs {
    #[command(flatten)]
    pub config: ConfigDirArg,

    /// Overwrite an existing rules file
    #[arg(long)]
    pub force: bool,
}

/// Execute rules command
pub fn execute(args: RulesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RulesCommand::Init(init_args) => execute_init(init_args),
        RulesCommand::Show(config) => execute_show(config),
    }
}

fn execute_init(args: RulesInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = TomlRuleStore::new(&args.config.config_dir);
    if store.path().exists() && !args.force {
        println!("Rules file already exists: {}", store.path().display());
        return Ok(());
    }

    store.save(&RulesFile::default())?;
    println!("✓ Wrote default rules to {}", store.path().display());
    Ok(())
}

fn execute_show(config: ConfigDirArg) -> Result<(), Box<dyn std::error::Error>> {
    let store = TomlRuleStore::new(&config.config_dir);
    let rules = store.load()?;
    let set = rules.to_rule_set();

    println!("Rules file: {}", store.path().display());
    print!("{}", rules.render());
    println!();
    println!(
        "Interpreted: {} kept group(s), {} kept id(s), {} removed group(s), {} removed id(s), ancestors {}",
        set.keep_groups().len(),
        set.keep_ids().len(),
        set.remove_groups().len(),
        set.remove_ids().len(),
        if set.protect_ancestors() { "protected" } else { "not protected" }
    );
    Ok(())
}
