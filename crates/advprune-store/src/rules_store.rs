//! Rule-set persistence
//!
//! Rules live in a small TOML file under the host's config directory. The
//! file is read leniently: unknown keys are ignored, odd values are
//! coerced, and a file that cannot be read at all is replaced by defaults
//! rather than blocking the pass.

use std::fs;
use std::path::{Path, PathBuf};

use advprune_core::RuleSet;
use serde::Serialize;
use toml::{Table, Value};

use crate::errors::{io_error, rules_io, rules_parse, Result};

/// File name of the rules file inside the config directory
pub const RULES_FILE_NAME: &str = "only_vanilla_advancements.toml";

const KEY_KEPT_MODS: &str = "kept_mods";
const KEY_KEPT_ADVANCEMENTS: &str = "kept_advancements";
const KEY_REMOVED_MODS: &str = "removed_mods";
const KEY_REMOVED_ADVANCEMENTS: &str = "removed_advancements";
const KEY_KEEP_PARENTS: &str = "keep_parent_advancements";

/// Raw contents of the rules file
///
/// Entries stay as text here; [`RulesFile::to_rule_set`] interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesFile {
    pub kept_mods: Vec<String>,
    pub kept_advancements: Vec<String>,
    pub removed_mods: Vec<String>,
    pub removed_advancements: Vec<String>,
    pub keep_parent_advancements: bool,
}

impl Default for RulesFile {
    fn default() -> Self {
        Self {
            kept_mods: Vec::new(),
            kept_advancements: Vec::new(),
            removed_mods: Vec::new(),
            removed_advancements: Vec::new(),
            keep_parent_advancements: true,
        }
    }
}

impl RulesFile {
    /// Parse file contents
    ///
    /// Missing keys take their defaults. Non-string list items are kept in
    /// their TOML rendering, a non-list value for a list key is ignored,
    /// and a non-bool `keep_parent_advancements` counts as true.
    ///
    /// # Errors
    ///
    /// Returns the TOML syntax error, with its span.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let table: Table = content.parse()?;

        let keep_parent_advancements = match table.get(KEY_KEEP_PARENTS) {
            None => true,
            Some(Value::Boolean(flag)) => *flag,
            Some(other) => {
                tracing::warn!(key = KEY_KEEP_PARENTS, value = %other, "expected a boolean, using true");
                true
            }
        };

        Ok(Self {
            kept_mods: string_list(&table, KEY_KEPT_MODS),
            kept_advancements: string_list(&table, KEY_KEPT_ADVANCEMENTS),
            removed_mods: string_list(&table, KEY_REMOVED_MODS),
            removed_advancements: string_list(&table, KEY_REMOVED_ADVANCEMENTS),
            keep_parent_advancements,
        })
    }

    /// Commented TOML rendering written by [`TomlRuleStore::save`]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# Advancement pruning rules\n");
        out.push_str("#\n");
        out.push_str("# Built-in advancements that are not overridden by a data pack are always kept.\n");
        out.push_str("# Everything added by mods or data packs is removed unless kept below.\n\n");

        push_list(&mut out, KEY_KEPT_MODS, "Mod ids whose advancements are kept", &self.kept_mods);
        push_list(
            &mut out,
            KEY_KEPT_ADVANCEMENTS,
            "Advancement ids that are kept, e.g. \"mymod:story/root\"",
            &self.kept_advancements,
        );
        push_list(
            &mut out,
            KEY_REMOVED_MODS,
            "Mod ids whose advancements are removed unless kept above",
            &self.removed_mods,
        );
        push_list(
            &mut out,
            KEY_REMOVED_ADVANCEMENTS,
            "Advancement ids that are removed unless kept above",
            &self.removed_advancements,
        );

        out.push_str("# Keep the parents of kept advancements so they stay reachable\n");
        out.push_str(&format!(
            "{} = {}\n",
            KEY_KEEP_PARENTS,
            Value::Boolean(self.keep_parent_advancements)
        ));
        out
    }

    /// Interpret the entries into the engine's rule set
    ///
    /// Malformed advancement ids are dropped with a warning.
    pub fn to_rule_set(&self) -> RuleSet {
        RuleSet::from_entries(
            &self.kept_mods,
            &self.kept_advancements,
            &self.removed_mods,
            &self.removed_advancements,
            self.keep_parent_advancements,
        )
    }
}

fn string_list(table: &Table, key: &str) -> Vec<String> {
    match table.get(key) {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(other) => {
            tracing::warn!(key, value = %other, "expected a list, ignoring");
            Vec::new()
        }
    }
}

fn push_list(out: &mut String, key: &str, comment: &str, items: &[String]) {
    let array = Value::Array(items.iter().cloned().map(Value::String).collect());
    out.push_str(&format!("# {}\n{} = {}\n\n", comment, key, array));
}

/// Storage for the user's rules
///
/// Hosts with their own settings storage implement this and hand it to the
/// pruner.
pub trait RuleStore {
    /// Current rules
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be produced at all.
    fn load(&self) -> Result<RulesFile>;

    /// Persist `rules` for later passes
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be written.
    fn save(&self, rules: &RulesFile) -> Result<()>;
}

/// Rules kept in `only_vanilla_advancements.toml`
#[derive(Debug, Clone)]
pub struct TomlRuleStore {
    path: PathBuf,
}

impl TomlRuleStore {
    /// Store backed by the rules file inside `config_dir`
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(RULES_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the rules file strictly
    ///
    /// # Errors
    ///
    /// * `Persistence` - the file could not be read
    /// * `Serialization` - the file is not valid TOML
    pub fn read(&self) -> Result<RulesFile> {
        let content = fs::read_to_string(&self.path).map_err(|e| rules_io(&self.path, e))?;
        RulesFile::parse(&content).map_err(|e| rules_parse(&self.path, &e))
    }

    /// Read the rules, writing defaults first when there are none
    ///
    /// An unreadable or unparseable file is replaced by defaults with a
    /// warning; only a failure to write those defaults is an error.
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the defaults cannot be written.
    pub fn load_or_create(&self) -> Result<RulesFile> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no rules file, writing defaults");
            let defaults = RulesFile::default();
            self.save(&defaults)?;
            return Ok(defaults);
        }

        match self.read() {
            Ok(rules) => Ok(rules),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    err.code = err.code(),
                    error = %err,
                    "rules file unusable, replacing with defaults"
                );
                let defaults = RulesFile::default();
                self.save(&defaults)?;
                Ok(defaults)
            }
        }
    }
}

impl RuleStore for TomlRuleStore {
    fn load(&self) -> Result<RulesFile> {
        self.load_or_create()
    }

    fn save(&self, rules: &RulesFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_config_dir", e))?;
        }
        fs::write(&self.path, rules.render()).map_err(|e| rules_io(&self.path, e))
    }
}
