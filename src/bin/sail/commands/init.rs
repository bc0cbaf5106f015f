//! `sail init` command

use anyhow::Result;

use sail::core::workspace::MANIFEST_NAME;
use sail::ops::sail_new::init_project;
use sail::util::shell::{Shell, Status};
use sail::util::GlobalContext;

pub fn execute(shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let name = init_project(ctx.cwd())?;
    tracing::debug!("initialized project {}", name);

    shell.status(Status::Created, MANIFEST_NAME);
    Ok(())
}
