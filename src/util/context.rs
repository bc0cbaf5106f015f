//! Global context for sail operations.
//!
//! Provides centralized access to the invocation directory and configuration.

use std::path::{Path, PathBuf};

use crate::core::workspace::{find_project_root, ProjectRoot};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};
use crate::util::errors::{SailError, SailResult};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the process working directory.
    pub fn new() -> SailResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| SailError::io(".", e))?;

        Ok(GlobalContext { cwd })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext { cwd }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Find the project root above the current directory.
    pub fn find_project_root(&self) -> SailResult<ProjectRoot> {
        find_project_root(&self.cwd)
    }

    /// Merged configuration for `root`, with environment overrides applied.
    pub fn config(&self, root: &ProjectRoot) -> Config {
        let global = global_config_path();
        let project = project_config_path(root.path());

        let mut config = load_config(global.as_deref(), Some(&project));
        config.apply_env();
        config
    }
}
