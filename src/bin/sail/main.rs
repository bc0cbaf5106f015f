//! sail CLI - a tiny Cargo-style project manager for C and C++

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use sail::util::errors::EXIT_FAILURE;
use sail::util::shell::{ColorChoice, Shell};
use sail::SailError;

fn main() {
    // Parse CLI; --version and usage errors exit here
    let cli = Cli::parse();
    let shell = Shell::new(ColorChoice::Auto);

    let code = match run(cli, &shell) {
        Ok(code) => code,
        Err(e) => report(&e, &shell),
    };

    std::process::exit(code);
}

fn run(cli: Cli, shell: &Shell) -> Result<i32> {
    // Set up logging
    let default_filter = if cli.verbose { "sail=debug" } else { "sail=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Some(ref message) = cli.message {
        println!("{}", message);
    }

    if cli.turn_based {
        tracing::debug!("turn-based mode selected");
    } else if cli.loop_based {
        tracing::debug!("loop-based mode selected");
    }

    // Execute command
    match cli.command {
        Some(Commands::Init) => commands::init::execute(shell).map(|()| 0),
        Some(Commands::New(args)) => commands::new::execute(args, shell).map(|()| 0),
        Some(Commands::Build(args)) => commands::build::execute(args, shell).map(|()| 0),
        Some(Commands::Run(args)) => commands::run::execute(args, shell),
        None => Ok(0),
    }
}

/// Print `err` and pick the exit code for it.
fn report(err: &anyhow::Error, shell: &Shell) -> i32 {
    // SailError messages already include their cause
    match err.downcast_ref::<SailError>() {
        Some(sail_err) => {
            shell.error(sail_err);
            if let Some(help) = miette::Diagnostic::help(sail_err) {
                shell.help(help);
            }
            sail_err.exit_code()
        }
        None => {
            shell.error(format!("{:#}", err));
            EXIT_FAILURE
        }
    }
}
