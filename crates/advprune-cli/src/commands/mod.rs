use std::path::PathBuf;

use clap::Args;

pub mod prune;
pub mod rules;

/// Where the rules file lives
#[derive(Debug, Clone, Args)]
pub struct ConfigDirArg {
    /// Directory holding only_vanilla_advancements.toml
    #[arg(long, env = "ADVPRUNE_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,
}
