//! Error kinds surfaced by sail operations.
//!
//! Every failure is reported once as a single message and mapped to a
//! process exit code. Nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::core::workspace::MANIFEST_NAME;

/// Exit code for every failure sail detects itself.
pub const EXIT_FAILURE: i32 = 1;

/// Result alias used throughout the library.
pub type SailResult<T> = Result<T, SailError>;

/// A failed sail operation.
#[derive(Debug, Error, Diagnostic)]
pub enum SailError {
    #[error("could not find `{}` in `{}` or any parent directory", MANIFEST_NAME, dir.display())]
    #[diagnostic(
        code(sail::manifest::not_found),
        help("run `sail init` to create one, or `sail new <name>` for a new project")
    )]
    ManifestNotFound { dir: PathBuf },

    #[error("failed to read `{}`: {reason}", path.display())]
    #[diagnostic(code(sail::manifest::unreadable))]
    ManifestUnreadable { path: PathBuf, reason: String },

    #[error("could not find the project name in `{}`", path.display())]
    #[diagnostic(
        code(sail::manifest::missing_name),
        help("add `name = \"...\"` to the [project] section")
    )]
    ManifestMissingName { path: PathBuf },

    #[error("source directory `{}` not found", path.display())]
    #[diagnostic(
        code(sail::build::no_sources),
        help("put your .c and .cpp files under `src/`")
    )]
    SourceDirectoryMissing { path: PathBuf },

    #[error("failed to create `{}`: {source}", path.display())]
    #[diagnostic(code(sail::build::description_write))]
    BuildDescriptionWriteFailed { path: PathBuf, source: io::Error },

    #[error("failed to create `{}`: {source}", path.display())]
    #[diagnostic(code(sail::new::write))]
    ScaffoldWriteFailed { path: PathBuf, source: io::Error },

    #[error("CMake configuration failed{}", describe_code(*code))]
    #[diagnostic(code(sail::build::configure))]
    ConfigureFailed { code: Option<i32> },

    #[error("build failed{}", describe_code(*code))]
    #[diagnostic(code(sail::build::compile))]
    CompileFailed { code: Option<i32> },

    #[error("executable not found at `{}`", path.display())]
    #[diagnostic(
        code(sail::run::no_executable),
        help("check that CMakeLists.txt still writes the binary to target/<mode>/")
    )]
    ExecutableNotFound { path: PathBuf },

    #[error("directory `{name}` already exists")]
    #[diagnostic(
        code(sail::new::exists),
        help("use `sail init` inside an existing directory instead")
    )]
    DirectoryExists { name: String },

    #[error("`{}` already exists in `{}`", MANIFEST_NAME, dir.display())]
    #[diagnostic(code(sail::init::exists))]
    ManifestAlreadyExists { dir: PathBuf },

    #[error("`{tool}` not found")]
    #[diagnostic(
        code(sail::build::tool_not_found),
        help("install CMake and make sure it is on your PATH, or set SAIL_CMAKE")
    )]
    ToolNotFound { tool: String },

    #[error("failed to execute `{command}`: {source}")]
    #[diagnostic(code(sail::process::spawn))]
    Spawn { command: String, source: io::Error },

    #[error("{}: {source}", path.display())]
    #[diagnostic(code(sail::io))]
    Io { path: PathBuf, source: io::Error },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl SailError {
    /// Wrap a filesystem error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SailError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The process exit code this error maps to.
    ///
    /// Native tool failures keep the tool's own code; everything else is
    /// [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            SailError::ConfigureFailed { code: Some(code) }
            | SailError::CompileFailed { code: Some(code) }
                if *code != 0 =>
            {
                *code
            }
            _ => EXIT_FAILURE,
        }
    }
}
