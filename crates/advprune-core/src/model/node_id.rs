use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{PruneError, Result};

/// Group reserved for the host's own built-in content
pub const NATIVE_GROUP: &str = "minecraft";

/// Namespaced advancement identifier, written `group:path`
///
/// Ordering is by group then path, which keeps removal sets and reports
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    group: String,
    path: String,
}

impl NodeId {
    /// Build an id from already-validated parts
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeId` if either part contains characters the host
    /// would reject.
    pub fn new(group: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let path = path.into();
        let raw = format!("{}:{}", group, path);

        if group.is_empty() {
            return Err(invalid(&raw, "empty group"));
        }
        if path.is_empty() {
            return Err(invalid(&raw, "empty path"));
        }
        if let Some(c) = group.chars().find(|c| !is_group_char(*c)) {
            return Err(invalid(&raw, &format!("illegal character '{}' in group", c)));
        }
        if let Some(c) = path.chars().find(|c| !is_path_char(*c)) {
            return Err(invalid(&raw, &format!("illegal character '{}' in path", c)));
        }

        Ok(Self { group, path })
    }

    /// Id in the native group
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeId` if `path` is not a legal path.
    pub fn native(path: impl Into<String>) -> Result<Self> {
        Self::new(NATIVE_GROUP, path)
    }

    /// Parse the textual form
    ///
    /// Surrounding whitespace is ignored. Text without a `:` is taken to be
    /// a path in the native group, the same way the host reads bare ids.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeId` for blank input or illegal characters.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid(text, "blank id"));
        }

        match trimmed.split_once(':') {
            Some((group, path)) => Self::new(group, path),
            None => Self::native(trimmed),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// True when the nominal group is the native group
    pub fn is_native(&self) -> bool {
        self.group == NATIVE_GROUP
    }
}

fn invalid(raw: &str, reason: &str) -> PruneError {
    PruneError::InvalidNodeId {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

fn is_group_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_group_char(c) || c == '/'
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.path)
    }
}

impl FromStr for NodeId {
    type Err = PruneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
