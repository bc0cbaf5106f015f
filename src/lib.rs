//! sail - a tiny Cargo-style project manager for C and C++
//!
//! This crate provides the library behind the `sail` binary: locating a
//! project's `Sail.toml`, generating its CMakeLists.txt and driving CMake
//! to build and run it.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for sail unit tests.
///
/// Only compiled for unit tests. Provides a scripted native build tool
/// and helpers for writing projects to disk.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BuildMode, BuildTarget, Manifest, ProjectRoot};
pub use util::context::GlobalContext;
pub use util::errors::{SailError, SailResult};
