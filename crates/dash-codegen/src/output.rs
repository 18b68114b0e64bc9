//! File system helpers for generated artifacts.
//!
//! Every helper maps failures to [`CodegenError::Io`] carrying the path.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::diagnostic::CodegenError;

/// Deletes `path` if it is an existing file. Returns whether it existed.
pub fn remove_stale(path: &Path) -> Result<bool, CodegenError> {
    if !path.is_file() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|e| CodegenError::io(path, e.to_string()))?;
    log::debug!("removed stale {}", path.display());
    Ok(true)
}

pub fn create_dir(path: &Path) -> Result<(), CodegenError> {
    std::fs::create_dir_all(path).map_err(|e| CodegenError::io(path, e.to_string()))
}

/// Writes `content` to `path`, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    ensure_parent(path)?;
    std::fs::write(path, content).map_err(|e| CodegenError::io(path, e.to_string()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Appends `content` to `path`, creating the file if needed.
pub fn append_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CodegenError::io(path, e.to_string()))?;
    file.write_all(content.as_bytes())
        .map_err(|e| CodegenError::io(path, e.to_string()))
}

pub fn copy_file(from: &Path, to: &Path) -> Result<(), CodegenError> {
    ensure_parent(to)?;
    std::fs::copy(from, to).map_err(|e| CodegenError::io(to, e.to_string()))?;
    log::debug!("copied {} to {}", from.display(), to.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), CodegenError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_then_extends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pkg").join("_imports_.py");

        append_file(&path, "a\n").unwrap();
        append_file(&path, "b\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_remove_stale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NAMESPACE");

        assert!(!remove_stale(&path).unwrap());
        std::fs::write(&path, "old").unwrap();
        assert!(remove_stale(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("R").join("f.R");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = write_file(&blocker.join("x.py"), "");
        assert!(matches!(result, Err(CodegenError::Io { .. })));
    }
}
