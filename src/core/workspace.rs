//! Project root discovery.
//!
//! A project root is the nearest directory, starting from the invocation
//! directory and moving upward, that directly contains `Sail.toml`. The
//! filesystem root is never searched.

use std::path::{Path, PathBuf};

use crate::core::manifest::Manifest;
use crate::core::target::{BuildMode, BuildTarget};
use crate::util::errors::{SailError, SailResult};

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Sail.toml";

/// Generated build description file name.
pub const BUILD_DESCRIPTION_NAME: &str = "CMakeLists.txt";

/// Directories searched for a manifest, nearest first.
///
/// Yields `start` and each of its ancestors, stopping before the filesystem
/// root (the first ancestor without a parent). The root is excluded even if
/// it contains a manifest.
pub fn search_dirs(start: &Path) -> impl Iterator<Item = &Path> {
    start.ancestors().take_while(|dir| dir.parent().is_some())
}

/// Locate the project root for `start`.
pub fn find_project_root(start: &Path) -> SailResult<ProjectRoot> {
    for dir in search_dirs(start) {
        if dir.join(MANIFEST_NAME).is_file() {
            tracing::debug!("found {} in {}", MANIFEST_NAME, dir.display());
            return Ok(ProjectRoot::new(dir));
        }
    }

    Err(SailError::ManifestNotFound {
        dir: start.to_path_buf(),
    })
}

/// A directory holding a `Sail.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Wrap a directory already known to contain a manifest.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProjectRoot { root: root.into() }
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_NAME)
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn build_description_path(&self) -> PathBuf {
        self.root.join(BUILD_DESCRIPTION_NAME)
    }

    /// `<root>/target`
    pub fn target_dir(&self) -> PathBuf {
        self.root.join("target")
    }

    /// Read the project name from the manifest.
    pub fn project_name(&self) -> SailResult<String> {
        Manifest::load(&self.manifest_path()).map(|m| m.project.name)
    }

    /// Resolve the output layout for `mode`.
    pub fn build_target(&self, mode: BuildMode, name: &str) -> BuildTarget {
        BuildTarget::new(&self.root, mode, name)
    }
}
