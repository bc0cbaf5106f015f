//! `sail new` command

use anyhow::Result;

use crate::cli::NewArgs;
use sail::ops::sail_new::new_project;
use sail::util::shell::{Shell, Status};
use sail::util::GlobalContext;

pub fn execute(args: NewArgs, shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::new()?;

    new_project(ctx.cwd(), &args.name)?;

    shell.status(Status::Created, format!("project '{}'", args.name));
    Ok(())
}
