//! Core data structures for sail.
//!
//! - The manifest and where it lives (`Sail.toml`, project root discovery)
//! - Build modes and the output layout under `target/`

pub mod manifest;
pub mod target;
pub mod workspace;

pub use manifest::Manifest;
pub use target::{BuildMode, BuildTarget};
pub use workspace::{find_project_root, ProjectRoot, MANIFEST_NAME};
