//! Shared utilities

pub mod config;
pub mod context;
pub mod errors;
pub mod fs;
pub mod process;
pub mod quote;
pub mod shell;

pub use config::Config;
pub use context::GlobalContext;
pub use errors::{SailError, SailResult};
