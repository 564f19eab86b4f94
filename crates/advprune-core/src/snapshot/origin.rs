use crate::model::{NodeId, NATIVE_GROUP};

use super::registry::{ResourcePath, ResourceResolver};

/// Source names that mark the built-in pack on every known host
pub const BUILTIN_SOURCE_NAMES: &[&str] = &["vanilla", "minecraft"];

/// Substrings other host distributions use in the built-in pack's name
///
/// This is an approximation: an override pack whose name happens to contain
/// one of these is treated as built-in.
pub const BUILTIN_SOURCE_MARKERS: &[&str] = &["builtin", "default"];

/// Where a node's effective definition was found to come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginResolution {
    /// Supplied by the built-in pack
    ResolvedBuiltin { source: String },
    /// Supplied by some other pack that shadows the built-in one
    ResolvedOverride { source: String },
    /// No resource, or the lookup failed
    Unresolved,
}

impl OriginResolution {
    /// Unresolved counts as built-in: when unsure, never treat content as an override
    pub fn is_builtin(&self) -> bool {
        !matches!(self, OriginResolution::ResolvedOverride { .. })
    }
}

/// True if `source` names the built-in pack
pub fn is_builtin_source(source: &str) -> bool {
    let lowered = source.trim().to_lowercase();
    BUILTIN_SOURCE_NAMES.iter().any(|name| lowered == *name)
        || BUILTIN_SOURCE_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
}

/// Resource holding the definition of a native advancement
pub fn canonical_resource(id: &NodeId) -> ResourcePath {
    ResourcePath::new(NATIVE_GROUP, format!("advancements/{}.json", id.path()))
}

/// Find out which pack supplies the effective definition of `id`
pub fn resolve_origin<R: ResourceResolver + ?Sized>(resolver: &R, id: &NodeId) -> OriginResolution {
    let resource = canonical_resource(id);
    match resolver.resolve_source(&resource) {
        Ok(Some(source)) if is_builtin_source(&source) => {
            OriginResolution::ResolvedBuiltin { source }
        }
        Ok(Some(source)) => OriginResolution::ResolvedOverride { source },
        Ok(None) => OriginResolution::Unresolved,
        Err(err) => {
            tracing::debug!(node_id = %id, resource = %resource, error = %err, "origin lookup failed, assuming built-in");
            OriginResolution::Unresolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PruneError, Result};
    use std::collections::HashMap;

    struct FixedResolver(HashMap<String, Option<String>>);

    impl ResourceResolver for FixedResolver {
        fn resolve_source(&self, resource: &ResourcePath) -> Result<Option<String>> {
            match self.0.get(&resource.to_string()) {
                Some(source) => Ok(source.clone()),
                None => Err(PruneError::ResolutionFailed {
                    resource: resource.to_string(),
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn resolver(entries: &[(&str, Option<&str>)]) -> FixedResolver {
        FixedResolver(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
        )
    }

    #[test]
    fn test_builtin_source_names() {
        for source in ["vanilla", "minecraft", "VANILLA", "fabric-builtin", "Default_Pack", "mod_defaults"] {
            assert!(is_builtin_source(source), "{source} should be built-in");
        }
        for source in ["file/mypack.zip", "fabric", "moda", ""] {
            assert!(!is_builtin_source(source), "{source} should not be built-in");
        }
    }

    #[test]
    fn test_canonical_resource() {
        let id = NodeId::native("story/mine_stone").unwrap();
        assert_eq!(
            canonical_resource(&id).to_string(),
            "minecraft:advancements/story/mine_stone.json"
        );
    }

    #[test]
    fn test_three_way_resolution() {
        let r = resolver(&[
            ("minecraft:advancements/a.json", Some("vanilla")),
            ("minecraft:advancements/b.json", Some("file/override.zip")),
            ("minecraft:advancements/c.json", None),
        ]);

        let a = resolve_origin(&r, &NodeId::native("a").unwrap());
        let b = resolve_origin(&r, &NodeId::native("b").unwrap());
        let c = resolve_origin(&r, &NodeId::native("c").unwrap());
        let d = resolve_origin(&r, &NodeId::native("d").unwrap());

        assert_eq!(a, OriginResolution::ResolvedBuiltin { source: "vanilla".into() });
        assert_eq!(b, OriginResolution::ResolvedOverride { source: "file/override.zip".into() });
        assert_eq!(c, OriginResolution::Unresolved);
        assert_eq!(d, OriginResolution::Unresolved);

        assert!(a.is_builtin());
        assert!(!b.is_builtin());
        assert!(c.is_builtin());
        assert!(d.is_builtin());
    }
}
