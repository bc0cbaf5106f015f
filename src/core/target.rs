//! Build modes and the on-disk output layout they select.

use std::env::consts::EXE_SUFFIX;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which configuration to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    #[default]
    Debug,
    Release,
}

impl BuildMode {
    /// Pick the mode from a `--release` flag.
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            BuildMode::Release
        } else {
            BuildMode::Debug
        }
    }

    /// Output subdirectory name under `target/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }

    /// CMake configuration name (`CMAKE_BUILD_TYPE`, `--config`).
    pub fn cmake_config(&self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Where a build in a given mode puts its state and its executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    mode: BuildMode,
    output_dir: PathBuf,
    build_dir: PathBuf,
    executable: PathBuf,
}

impl BuildTarget {
    /// Derive the layout for project `name` rooted at `root`.
    pub fn new(root: &Path, mode: BuildMode, name: &str) -> Self {
        let output_dir = root.join("target").join(mode.dir_name());
        let build_dir = output_dir.join("build");
        let executable = output_dir.join(format!("{}{}", name, EXE_SUFFIX));

        BuildTarget {
            mode,
            output_dir,
            build_dir,
            executable,
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// `target/<mode>/`
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `target/<mode>/build/`, the CMake binary directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Expected path of the linked executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}
