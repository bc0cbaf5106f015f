//! High-level operations.
//!
//! This module contains the implementation of sail commands.

pub mod sail_build;
pub mod sail_new;
pub mod sail_run;

pub use sail_build::{build, BuildResult};
pub use sail_new::{init_project, new_project};
pub use sail_run::run;
