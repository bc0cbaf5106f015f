//! Native build driving.
//!
//! Generates the project's CMakeLists.txt and runs CMake's configure and
//! build steps.

pub mod cmake;
pub mod description;

pub use cmake::{CMakeTool, NativeBuildTool};
pub use description::ensure_build_description;
