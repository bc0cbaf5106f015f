//! Filesystem utilities.

use std::fs;
use std::path::Path;

use crate::util::errors::{SailError, SailResult};

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> SailResult<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| SailError::io(path, e))?;
    }
    Ok(())
}

/// Write `contents` to `path` only if nothing is there yet.
///
/// Returns `true` if the file was written.
pub fn write_if_absent(path: &Path, contents: &str) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, contents)?;
    Ok(true)
}

/// Base name of a directory, used as a default project name.
pub fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, SailError::Io { .. }));
    }

    #[test]
    fn test_write_if_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");

        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name(Path::new("/work/demo")), Some("demo".to_string()));
        assert_eq!(dir_name(Path::new("/")), None);
    }
}
