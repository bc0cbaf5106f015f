//! Test utilities and mocks for sail unit tests.
//!
//! Provides a scripted [`NativeBuildTool`] so the build orchestrator can be
//! exercised without CMake, plus helpers for laying out projects on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use sail::test_support::{MockBuildTool, ToolCall, write_project};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     let root = write_project(tmp.path(), "demo");
//!     let tool = MockBuildTool::new().fail_compile(2);
//!
//!     // Drive ops::sail_build::build with &tool...
//!     assert_eq!(tool.calls().len(), 2);
//! }
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::builder::cmake::NativeBuildTool;
use crate::core::manifest::generate_manifest;
use crate::core::target::BuildMode;
use crate::core::workspace::{ProjectRoot, MANIFEST_NAME};
use crate::util::errors::{SailError, SailResult};

/// A recorded invocation of the mock tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Configure {
        source_dir: PathBuf,
        build_dir: PathBuf,
        mode: BuildMode,
    },
    Compile {
        build_dir: PathBuf,
        mode: BuildMode,
    },
}

/// Scripted native build tool that records every call.
#[derive(Debug, Default)]
pub struct MockBuildTool {
    configure_code: Option<Option<i32>>,
    compile_code: Option<Option<i32>>,
    calls: RefCell<Vec<ToolCall>>,
}

impl MockBuildTool {
    /// A tool whose steps all succeed and produce nothing.
    pub fn new() -> Self {
        MockBuildTool::default()
    }

    /// Make configure exit with `code`.
    pub fn fail_configure(mut self, code: i32) -> Self {
        self.configure_code = Some(Some(code));
        self
    }

    /// Make compile exit with `code`.
    pub fn fail_compile(mut self, code: i32) -> Self {
        self.compile_code = Some(Some(code));
        self
    }

    /// Make compile die without an exit code.
    pub fn kill_compile(mut self) -> Self {
        self.compile_code = Some(None);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.borrow().clone()
    }
}

impl NativeBuildTool for MockBuildTool {
    fn configure(&self, source_dir: &Path, build_dir: &Path, mode: BuildMode) -> SailResult<()> {
        self.calls.borrow_mut().push(ToolCall::Configure {
            source_dir: source_dir.to_path_buf(),
            build_dir: build_dir.to_path_buf(),
            mode,
        });

        match self.configure_code {
            Some(code) => Err(SailError::ConfigureFailed { code }),
            None => Ok(()),
        }
    }

    fn compile(&self, build_dir: &Path, mode: BuildMode) -> SailResult<()> {
        self.calls.borrow_mut().push(ToolCall::Compile {
            build_dir: build_dir.to_path_buf(),
            mode,
        });

        match self.compile_code {
            Some(code) => Err(SailError::CompileFailed { code }),
            None => Ok(()),
        }
    }
}

/// Write a minimal project (manifest plus `src/main.cpp`) under `dir`.
pub fn write_project(dir: &Path, name: &str) -> ProjectRoot {
    std::fs::create_dir_all(dir.join("src")).expect("create src dir");
    std::fs::write(dir.join(MANIFEST_NAME), generate_manifest(name)).expect("write manifest");
    std::fs::write(dir.join("src").join("main.cpp"), "int main() { return 0; }\n")
        .expect("write main.cpp");
    ProjectRoot::new(dir)
}
