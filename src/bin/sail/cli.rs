//! CLI definitions using clap.

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand};

/// sail - a tiny Cargo-style project manager for C and C++ on top of CMake
#[derive(Parser)]
#[command(name = "sail")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print a message to stdout before doing anything else
    #[arg(short, long, global = true)]
    pub message: Option<String>,

    /// Select the turn-based mode
    #[arg(long = "turn_based", global = true, conflicts_with = "loop_based")]
    pub turn_based: bool,

    /// Select the loop-based mode
    #[arg(long = "loop_based", global = true)]
    pub loop_based: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create Sail.toml in the current directory
    Init,

    /// Create a new project in a new directory
    New(NewArgs),

    /// Configure and compile the current project
    Build(BuildArgs),

    /// Build, then run the project's executable
    Run(RunArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Project name, also used as the directory name
    pub name: String,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Build in release mode
    #[arg(short, long)]
    pub release: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Build in release mode
    #[arg(short, long)]
    pub release: bool,

    /// Arguments passed to the program, after `--`
    #[arg(last = true)]
    pub args: Vec<OsString>,
}
