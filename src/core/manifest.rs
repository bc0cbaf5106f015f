//! Sail.toml manifest parsing and generation.
//!
//! Only the `[project]` table is interpreted. `[dependencies]` is kept as an
//! opaque table: sail does not resolve or fetch anything.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::util::errors::{SailError, SailResult};

/// Version written into freshly generated manifests.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// The parsed Sail.toml manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Project metadata from [project]
    pub project: ProjectMetadata,

    /// The [dependencies] table, uninterpreted
    pub dependencies: BTreeMap<String, toml::Value>,
}

/// Project metadata from the [project] section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
}

/// Raw manifest as deserialized from TOML, before validation.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    project: Option<RawProject>,

    #[serde(default)]
    dependencies: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    version: Option<String>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> SailResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SailError::ManifestUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> SailResult<Self> {
        let raw: RawManifest =
            toml::from_str(content).map_err(|e| SailError::ManifestUnreadable {
                path: path.to_path_buf(),
                reason: e.message().to_string(),
            })?;

        let project = raw.project.unwrap_or(RawProject {
            name: None,
            version: None,
        });

        let name = match project.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(SailError::ManifestMissingName {
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(Manifest {
            project: ProjectMetadata {
                name,
                version: project
                    .version
                    .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            },
            dependencies: raw.dependencies,
        })
    }

    /// The declared project name.
    pub fn name(&self) -> &str {
        &self.project.name
    }
}

/// Render the manifest written by `sail new` and `sail init`.
pub fn generate_manifest(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "{DEFAULT_VERSION}"

[dependencies]
"#
    )
}
