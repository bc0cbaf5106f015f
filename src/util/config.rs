//! Configuration file support for sail.
//!
//! Two locations are read:
//! - Global: `<config dir>/config.toml` (per-user, via `directories`)
//! - Project: `.sail/config.toml` next to `Sail.toml`
//!
//! Project config takes precedence over global config. The `SAIL_CMAKE`
//! environment variable overrides both for the CMake executable.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Environment variable naming the CMake executable to use.
pub const CMAKE_ENV: &str = "SAIL_CMAKE";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("", "", "sail"));

/// sail configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Path to the CMake executable
    pub cmake: Option<PathBuf>,

    /// CMake generator passed as `-G` at configure time
    pub generator: Option<String>,

    /// Parallel jobs passed as `--parallel` at build time
    pub jobs: Option<usize>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.cmake.is_some() {
            self.build.cmake = other.build.cmake;
        }
        if other.build.generator.is_some() {
            self.build.generator = other.build.generator;
        }
        if other.build.jobs.is_some() {
            self.build.jobs = other.build.jobs;
        }
    }

    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        if let Some(cmake) = std::env::var_os(CMAKE_ENV) {
            if !cmake.is_empty() {
                self.build.cmake = Some(PathBuf::from(cmake));
            }
        }
    }
}

/// Global config file path, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Project config path (`.sail/config.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".sail").join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.sail/config.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: Option<&Path>) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    if let Some(project) = project_path {
        config.merge(Config::load_or_default(project));
    }

    config
}
