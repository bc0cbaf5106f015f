//! Implementation of `sail run`.

use std::ffi::OsString;
use std::path::Path;

use crate::builder::cmake::NativeBuildTool;
use crate::core::target::BuildMode;
use crate::core::workspace::ProjectRoot;
use crate::ops::sail_build::build;
use crate::util::errors::{SailError, SailResult, EXIT_FAILURE};
use crate::util::process::ProcessBuilder;
use crate::util::shell::{Shell, Status};

/// Build the project, then run its executable with `args`.
///
/// Returns the program's exit code. A program killed by a signal yields
/// [`EXIT_FAILURE`].
pub fn run(
    root: &ProjectRoot,
    mode: BuildMode,
    args: &[OsString],
    tool: &dyn NativeBuildTool,
    shell: &Shell,
) -> SailResult<i32> {
    let result = build(root, mode, tool, shell)?;

    let exe = result.executable();
    if !exe.is_file() {
        return Err(SailError::ExecutableNotFound {
            path: exe.to_path_buf(),
        });
    }

    shell.status(Status::Running, running_label(exe));

    let status = ProcessBuilder::new(exe).args(args).status()?;

    Ok(status.code().unwrap_or(EXIT_FAILURE))
}

/// The executable's file name in backticks, as shown on the `Running` line.
fn running_label(exe: &Path) -> String {
    let name = exe.file_name().map(Path::new).unwrap_or(exe);
    format!("`{}`", name.display())
}
