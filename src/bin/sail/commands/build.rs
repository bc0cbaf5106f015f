//! `sail build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use sail::builder::CMakeTool;
use sail::core::workspace::BUILD_DESCRIPTION_NAME;
use sail::core::BuildMode;
use sail::ops::sail_build::{build, BuildResult};
use sail::util::shell::{Shell, Status};
use sail::util::GlobalContext;

pub fn execute(args: BuildArgs, shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let root = ctx.find_project_root()?;

    let config = ctx.config(&root);
    let tool = CMakeTool::from_config(&config);

    let mode = BuildMode::from_release_flag(args.release);
    let result = build(&root, mode, &tool, shell)?;

    report(&result, shell);
    Ok(())
}

/// Print the closing line of a build.
fn report(result: &BuildResult, shell: &Shell) {
    let mode = result.target.mode();

    if result.generated_description {
        shell.status(Status::Created, BUILD_DESCRIPTION_NAME);
    }

    if result.executable().is_file() {
        shell.status(
            Status::Finished,
            format!(
                "{} [{}] target(s) in target/{}/",
                mode,
                mode.cmake_config(),
                mode.dir_name()
            ),
        );
    } else {
        shell.warn(format!(
            "executable not found at expected location `{}`",
            result.executable().display()
        ));
    }
}
