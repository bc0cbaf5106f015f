//! Implementation of `sail new` and `sail init`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::manifest::generate_manifest;
use crate::core::workspace::MANIFEST_NAME;
use crate::util::errors::{SailError, SailResult};
use crate::util::fs::dir_name;

/// Starter source written by `sail new`.
pub const MAIN_CPP: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}
"#;

/// Create project `name` as a new directory under `parent`.
///
/// Only one directory level is created, so `parent` must exist and `name`
/// must not reach into a missing subdirectory. Fails if `<parent>/<name>`
/// already exists. Files are written in order (directory, `src/`, manifest,
/// `src/main.cpp`) and the first failure aborts without cleaning up.
pub fn new_project(parent: &Path, name: &str) -> SailResult<PathBuf> {
    let path = parent.join(name);

    fs::create_dir(&path).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => SailError::DirectoryExists {
            name: name.to_string(),
        },
        _ => SailError::ScaffoldWriteFailed {
            path: path.clone(),
            source,
        },
    })?;

    let src_dir = path.join("src");
    fs::create_dir(&src_dir).map_err(scaffold_error(&src_dir))?;

    let manifest_path = path.join(MANIFEST_NAME);
    fs::write(&manifest_path, generate_manifest(name)).map_err(scaffold_error(&manifest_path))?;

    let main_path = src_dir.join("main.cpp");
    fs::write(&main_path, MAIN_CPP).map_err(scaffold_error(&main_path))?;

    tracing::info!("scaffolded {} in {}", name, path.display());
    Ok(path)
}

/// Write a manifest into the existing directory `dir`, named after it.
///
/// Returns the project name used.
pub fn init_project(dir: &Path) -> SailResult<String> {
    let manifest_path = dir.join(MANIFEST_NAME);
    if manifest_path.exists() {
        return Err(SailError::ManifestAlreadyExists {
            dir: dir.to_path_buf(),
        });
    }

    let name = dir_name(dir).ok_or_else(|| SailError::ScaffoldWriteFailed {
        path: manifest_path.clone(),
        source: io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot derive a project name from this directory",
        ),
    })?;

    fs::write(&manifest_path, generate_manifest(&name)).map_err(scaffold_error(&manifest_path))?;

    tracing::info!("initialized {} in {}", name, dir.display());
    Ok(name)
}

fn scaffold_error(path: &Path) -> impl FnOnce(io::Error) -> SailError + '_ {
    move |source| SailError::ScaffoldWriteFailed {
        path: path.to_path_buf(),
        source,
    }
}
