//! Subprocess execution utilities.
//!
//! Children inherit the parent's working directory, environment and stdio,
//! and are waited on without a timeout.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::util::errors::{SailError, SailResult};
use crate::util::quote::quote_path;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run with inherited stdio and wait for completion.
    pub fn status(&self) -> SailResult<ExitStatus> {
        tracing::debug!("running `{}`", self.display_command());

        let status = self
            .build_command()
            .status()
            .map_err(|source| SailError::Spawn {
                command: self.display_command(),
                source,
            })?;

        tracing::debug!("`{}` exited with {:?}", self.program.display(), status.code());
        Ok(status)
    }

    /// Display the command for logs and error messages.
    ///
    /// Arguments containing spaces are quoted for the host shell.
    pub fn display_command(&self) -> String {
        let mut parts = vec![display_part(self.program.as_os_str())];
        parts.extend(self.args.iter().map(|a| display_part(a)));
        parts.join(" ")
    }
}

fn display_part(part: &OsStr) -> String {
    let part = part.to_string_lossy();
    if part.contains(' ') {
        quote_path(&part)
    } else {
        part.into_owned()
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Find CMake.
///
/// An explicit path (from config or `SAIL_CMAKE`) is used as given.
/// Otherwise `cmake` is looked up on `PATH`, falling back to the bare name
/// so a missing tool surfaces when it is first spawned.
pub fn find_cmake(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => find_executable("cmake").unwrap_or_else(|| PathBuf::from("cmake")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("gcc").args(["-Wall", "-o", "output", "input.c"]);

        assert_eq!(pb.display_command(), "gcc -Wall -o output input.c");
    }

    #[test]
    fn test_display_command_quotes_spaces() {
        let pb = ProcessBuilder::new("cmake").args(["-S", "/my proj"]);

        if cfg!(windows) {
            assert_eq!(pb.display_command(), "cmake -S \"/my proj\"");
        } else {
            assert_eq!(pb.display_command(), "cmake -S /my\\ proj");
        }
    }

    #[test]
    fn test_args_kept_verbatim() {
        let pb = ProcessBuilder::new("prog").arg("a b").args(["*", "$HOME"]);
        let args: Vec<_> = pb.get_args().iter().map(|a| a.to_string_lossy()).collect();
        assert_eq!(args, vec!["a b", "*", "$HOME"]);
        assert_eq!(pb.get_program(), Path::new("prog"));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = ProcessBuilder::new("sail-definitely-not-a-real-program")
            .status()
            .unwrap_err();
        assert!(matches!(err, SailError::Spawn { .. }));
    }

    #[test]
    fn test_explicit_cmake_wins() {
        assert_eq!(
            find_cmake(Some(Path::new("/opt/cmake/bin/cmake"))),
            PathBuf::from("/opt/cmake/bin/cmake")
        );
        assert_eq!(find_cmake(None).file_stem(), Some(OsStr::new("cmake")));
    }

    #[cfg(unix)]
    #[test]
    fn test_status_reports_exit_code() {
        let status = ProcessBuilder::new("sh").args(["-c", "exit 7"]).status().unwrap();
        assert_eq!(status.code(), Some(7));
    }
}
