//! CMake driver.
//!
//! The orchestrator talks to the native build tool through
//! [`NativeBuildTool`]; [`CMakeTool`] is the real implementation.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::core::target::BuildMode;
use crate::util::config::Config;
use crate::util::errors::{SailError, SailResult};
use crate::util::process::{find_cmake, ProcessBuilder};

/// A native build tool with a separate configure and compile step.
pub trait NativeBuildTool {
    /// Generate build files for `source_dir` into `build_dir`.
    ///
    /// Fails with [`SailError::ConfigureFailed`] if the tool exits non-zero.
    fn configure(&self, source_dir: &Path, build_dir: &Path, mode: BuildMode) -> SailResult<()>;

    /// Compile an already configured `build_dir`.
    ///
    /// Fails with [`SailError::CompileFailed`] if the tool exits non-zero.
    fn compile(&self, build_dir: &Path, mode: BuildMode) -> SailResult<()>;
}

/// CMake invoked as a subprocess.
#[derive(Debug, Clone)]
pub struct CMakeTool {
    program: PathBuf,
    generator: Option<String>,
    jobs: Option<usize>,
}

impl CMakeTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CMakeTool {
            program: program.into(),
            generator: None,
            jobs: None,
        }
    }

    /// Locate CMake using the config override or `PATH`, and pick up the
    /// generator and job settings.
    pub fn from_config(config: &Config) -> Self {
        let program = find_cmake(config.build.cmake.as_deref());
        tracing::debug!("using cmake at {}", program.display());

        CMakeTool {
            program,
            generator: config.build.generator.clone(),
            jobs: config.build.jobs,
        }
    }

    /// Set the generator passed as `-G`.
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Set the job count passed as `--parallel`.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `cmake -DCMAKE_BUILD_TYPE=<Mode> -S <src> -B <build> [-G <gen>]`
    pub fn configure_command(
        &self,
        source_dir: &Path,
        build_dir: &Path,
        mode: BuildMode,
    ) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.program)
            .arg(format!("-DCMAKE_BUILD_TYPE={}", mode.cmake_config()))
            .arg("-S")
            .arg(source_dir)
            .arg("-B")
            .arg(build_dir);

        if let Some(ref generator) = self.generator {
            cmd = cmd.arg("-G").arg(generator);
        }

        cmd
    }

    /// `cmake --build <build> --config <Mode> [--parallel <n>]`
    pub fn compile_command(&self, build_dir: &Path, mode: BuildMode) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.program)
            .arg("--build")
            .arg(build_dir)
            .arg("--config")
            .arg(mode.cmake_config());

        if let Some(jobs) = self.jobs {
            cmd = cmd.arg("--parallel").arg(jobs.to_string());
        }

        cmd
    }

    fn exec(&self, cmd: ProcessBuilder) -> SailResult<ExitStatus> {
        cmd.status().map_err(|err| match err {
            SailError::Spawn { ref source, .. } if source.kind() == io::ErrorKind::NotFound => {
                SailError::ToolNotFound {
                    tool: self.program.display().to_string(),
                }
            }
            other => other,
        })
    }
}

impl NativeBuildTool for CMakeTool {
    fn configure(&self, source_dir: &Path, build_dir: &Path, mode: BuildMode) -> SailResult<()> {
        let status = self.exec(self.configure_command(source_dir, build_dir, mode))?;
        check(status, |code| SailError::ConfigureFailed { code })
    }

    fn compile(&self, build_dir: &Path, mode: BuildMode) -> SailResult<()> {
        let status = self.exec(self.compile_command(build_dir, mode))?;
        check(status, |code| SailError::CompileFailed { code })
    }
}

fn check(status: ExitStatus, fail: impl FnOnce(Option<i32>) -> SailError) -> SailResult<()> {
    if status.success() {
        Ok(())
    } else {
        tracing::debug!("cmake failed with {:?}", status.code());
        Err(fail(status.code()))
    }
}
