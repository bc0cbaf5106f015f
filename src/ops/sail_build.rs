//! Implementation of `sail build`.

use std::path::Path;

use crate::builder::cmake::NativeBuildTool;
use crate::builder::description::ensure_build_description;
use crate::core::target::{BuildMode, BuildTarget};
use crate::core::workspace::ProjectRoot;
use crate::util::errors::{SailError, SailResult};
use crate::util::fs::ensure_dir;
use crate::util::shell::{Shell, Status};

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Project name from the manifest
    pub name: String,

    /// Output layout for the selected mode
    pub target: BuildTarget,

    /// Whether CMakeLists.txt was generated by this build
    pub generated_description: bool,
}

impl BuildResult {
    /// Expected executable path. Not checked for existence.
    pub fn executable(&self) -> &Path {
        self.target.executable()
    }
}

/// Configure and compile the project at `root` in `mode`.
///
/// Everything that can be checked locally (manifest, `src/`, output
/// directories, CMakeLists.txt) is done before `tool` is invoked. Compile
/// only runs after a successful configure.
pub fn build(
    root: &ProjectRoot,
    mode: BuildMode,
    tool: &dyn NativeBuildTool,
    shell: &Shell,
) -> SailResult<BuildResult> {
    let name = root.project_name()?;
    let target = root.build_target(mode, &name);

    let src_dir = root.src_dir();
    if !src_dir.is_dir() {
        return Err(SailError::SourceDirectoryMissing { path: src_dir });
    }

    ensure_dir(target.output_dir())?;
    let generated_description = ensure_build_description(root.path(), &name)?;
    ensure_dir(target.build_dir())?;

    shell.status(Status::Configuring, format!("{} ({})", name, root.path().display()));
    tool.configure(root.path(), target.build_dir(), mode)?;

    shell.status(Status::Compiling, format!("{} [{}]", name, mode.cmake_config()));
    tool.compile(target.build_dir(), mode)?;

    tracing::debug!("expecting executable at {}", target.executable().display());

    Ok(BuildResult {
        name,
        target,
        generated_description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_project, MockBuildTool, ToolCall};
    use crate::util::shell::ColorChoice;
    use tempfile::TempDir;

    fn shell() -> Shell {
        Shell::new(ColorChoice::Never)
    }

    #[test]
    fn test_build_debug() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new();

        let result = build(&root, BuildMode::Debug, &tool, &shell()).unwrap();

        let build_dir = tmp.path().join("target/debug/build");
        assert_eq!(result.name, "demo");
        assert!(result.generated_description);
        assert!(build_dir.is_dir());
        assert!(tmp.path().join("CMakeLists.txt").is_file());
        assert!(result.executable().starts_with(tmp.path().join("target/debug")));
        assert_eq!(
            tool.calls(),
            vec![
                ToolCall::Configure {
                    source_dir: tmp.path().to_path_buf(),
                    build_dir: build_dir.clone(),
                    mode: BuildMode::Debug,
                },
                ToolCall::Compile {
                    build_dir,
                    mode: BuildMode::Debug,
                },
            ]
        );
    }

    #[test]
    fn test_build_release_layout() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new();

        let result = build(&root, BuildMode::Release, &tool, &shell()).unwrap();

        assert!(tmp.path().join("target/release/build").is_dir());
        assert!(!tmp.path().join("target/debug").exists());
        assert_eq!(result.target.mode(), BuildMode::Release);
    }

    #[test]
    fn test_rebuild_keeps_description() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new();

        build(&root, BuildMode::Debug, &tool, &shell()).unwrap();
        std::fs::write(tmp.path().join("CMakeLists.txt"), "# mine\n").unwrap();

        let result = build(&root, BuildMode::Debug, &tool, &shell()).unwrap();
        assert!(!result.generated_description);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("CMakeLists.txt")).unwrap(),
            "# mine\n"
        );
        assert_eq!(tool.calls().len(), 4);
    }

    #[test]
    fn test_missing_src_runs_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        std::fs::remove_dir_all(tmp.path().join("src")).unwrap();
        let tool = MockBuildTool::new();

        let err = build(&root, BuildMode::Debug, &tool, &shell()).unwrap_err();

        assert!(matches!(err, SailError::SourceDirectoryMissing { .. }));
        assert!(tool.calls().is_empty());
        assert!(!tmp.path().join("target").exists());
        assert!(!tmp.path().join("CMakeLists.txt").exists());
    }

    #[test]
    fn test_missing_name_runs_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        std::fs::write(tmp.path().join("Sail.toml"), "[project]\nversion = \"0.1.0\"\n").unwrap();
        let tool = MockBuildTool::new();

        let err = build(&root, BuildMode::Debug, &tool, &shell()).unwrap_err();

        assert!(matches!(err, SailError::ManifestMissingName { .. }));
        assert!(tool.calls().is_empty());
    }

    #[test]
    fn test_configure_failure_skips_compile() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new().fail_configure(1);

        let err = build(&root, BuildMode::Debug, &tool, &shell()).unwrap_err();

        assert!(matches!(err, SailError::ConfigureFailed { code: Some(1) }));
        assert_eq!(tool.calls().len(), 1);
        assert!(matches!(tool.calls()[0], ToolCall::Configure { .. }));
    }

    #[test]
    fn test_compile_failure_reports_no_executable() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new().fail_compile(2);

        let err = build(&root, BuildMode::Debug, &tool, &shell()).unwrap_err();

        assert!(matches!(err, SailError::CompileFailed { code: Some(2) }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(tool.calls().len(), 2);
    }

    #[test]
    fn test_killed_compile_maps_to_failure() {
        let tmp = TempDir::new().unwrap();
        let root = write_project(tmp.path(), "demo");
        let tool = MockBuildTool::new().kill_compile();

        let err = build(&root, BuildMode::Release, &tool, &shell()).unwrap_err();

        assert!(matches!(err, SailError::CompileFailed { code: None }));
        assert_eq!(err.exit_code(), 1);
    }
}
