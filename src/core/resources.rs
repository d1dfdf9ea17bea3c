//=========================================================================
// Resource Locations
//=========================================================================
//
// Manifest of where assets live, grouped by resource group.
//
// Format:
// ```toml
// [groups.General]
// FileSystem = ["media", "media/textures"]
// Zip = ["packs/momo.zip"]
// ```
//
// Each (group, kind, path) triple becomes one `ResourceLocation`. Order is
// deterministic: groups and kinds sorted by name, paths as listed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::config::{read_toml, ConfigError};

//=== ResourceLocation ====================================================

/// One place the asset system searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    pub group: String,
    /// Archive type, e.g. `FileSystem` or `Zip`.
    pub kind: String,
    pub path: PathBuf,
}

//=== Manifest ============================================================

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    groups: BTreeMap<String, BTreeMap<String, Vec<PathBuf>>>,
}

impl Manifest {
    fn into_locations(self) -> Vec<ResourceLocation> {
        let mut out = Vec::new();
        for (group, kinds) in self.groups {
            for (kind, paths) in kinds {
                out.extend(paths.into_iter().map(|path| ResourceLocation {
                    group: group.clone(),
                    kind: kind.clone(),
                    path,
                }));
            }
        }
        out
    }
}

/// Loads every location listed in the manifest at `path`.
pub fn load_locations(path: impl AsRef<Path>) -> Result<Vec<ResourceLocation>, ConfigError> {
    let manifest: Manifest = read_toml(path.as_ref())?;
    Ok(manifest.into_locations())
}

/// Parses a manifest from TOML text.
pub fn parse_locations(text: &str) -> Result<Vec<ResourceLocation>, toml::de::Error> {
    let manifest: Manifest = toml::from_str(text)?;
    Ok(manifest.into_locations())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_groups_in_sorted_order() {
        let locations = parse_locations(
            r#"
            [groups.Momo]
            Zip = ["packs/momo.zip"]

            [groups.General]
            Zip = ["packs/base.zip"]
            FileSystem = ["media", "media/textures"]
            "#,
        )
        .unwrap();

        let triples: Vec<_> = locations
            .iter()
            .map(|l| (l.group.as_str(), l.kind.as_str(), l.path.to_str().unwrap()))
            .collect();

        assert_eq!(
            triples,
            vec![
                ("General", "FileSystem", "media"),
                ("General", "FileSystem", "media/textures"),
                ("General", "Zip", "packs/base.zip"),
                ("Momo", "Zip", "packs/momo.zip"),
            ]
        );
    }

    #[test]
    fn empty_manifest_has_no_locations() {
        assert!(parse_locations("").unwrap().is_empty());
    }

    #[test]
    fn scalar_path_is_rejected() {
        assert!(parse_locations("[groups.General]\nFileSystem = \"media\"").is_err());
    }

    #[test]
    fn missing_manifest_is_io_error() {
        let err = load_locations("no/such/resources.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
