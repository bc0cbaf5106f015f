//! `sail run` command

use anyhow::Result;

use crate::cli::RunArgs;
use sail::builder::CMakeTool;
use sail::core::BuildMode;
use sail::ops::sail_run::run;
use sail::util::shell::Shell;
use sail::util::GlobalContext;

/// Returns the program's exit code.
pub fn execute(args: RunArgs, shell: &Shell) -> Result<i32> {
    let ctx = GlobalContext::new()?;
    let root = ctx.find_project_root()?;

    let config = ctx.config(&root);
    let tool = CMakeTool::from_config(&config);

    let mode = BuildMode::from_release_flag(args.release);
    let code = run(&root, mode, &args.args, &tool, shell)?;

    tracing::debug!("program exited with {}", code);
    Ok(code)
}
