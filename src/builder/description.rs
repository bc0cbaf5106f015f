//! Generation of the project's CMakeLists.txt.
//!
//! The file is written once and never touched again, so users are free to
//! edit it.

use std::path::Path;

use crate::core::workspace::BUILD_DESCRIPTION_NAME;
use crate::util::errors::{SailError, SailResult};
use crate::util::fs::write_if_absent;

/// Minimum CMake version the generated file asks for.
pub const CMAKE_MINIMUM_VERSION: &str = "3.21";

/// Render the build description for project `name`.
pub fn render_build_description(name: &str) -> String {
    format!(
        r#"cmake_minimum_required(VERSION {CMAKE_MINIMUM_VERSION})
project({name} VERSION 0.1.0 LANGUAGES C CXX)

set(CMAKE_CXX_STANDARD 17)
set(CMAKE_CXX_STANDARD_REQUIRED ON)

file(GLOB_RECURSE SOURCES CONFIGURE_DEPENDS
    "${{CMAKE_SOURCE_DIR}}/src/*.cpp"
    "${{CMAKE_SOURCE_DIR}}/src/*.c"
)

add_executable({name} ${{SOURCES}})

set_target_properties({name} PROPERTIES
    RUNTIME_OUTPUT_DIRECTORY_DEBUG "${{CMAKE_SOURCE_DIR}}/target/debug"
    RUNTIME_OUTPUT_DIRECTORY_RELEASE "${{CMAKE_SOURCE_DIR}}/target/release"
    OUTPUT_NAME "{name}"
)
"#
    )
}

/// Write `CMakeLists.txt` into `root` unless one already exists.
///
/// Returns `true` if a file was written.
pub fn ensure_build_description(root: &Path, name: &str) -> SailResult<bool> {
    let path = root.join(BUILD_DESCRIPTION_NAME);

    let written = write_if_absent(&path, &render_build_description(name))
        .map_err(|source| SailError::BuildDescriptionWriteFailed {
            path: path.clone(),
            source,
        })?;

    if written {
        tracing::info!("generated {}", path.display());
    } else {
        tracing::debug!("keeping existing {}", path.display());
    }

    Ok(written)
}
