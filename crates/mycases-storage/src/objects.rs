//! Raw file operations under the data root.
//!
//! Writes are atomic: the body goes to a `.tmp` sibling first and is then
//! renamed over the target, so a failed write leaves the old file intact.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Read a whole file.
pub fn get_object(path: &Path) -> Result<Vec<u8>, StorageError> {
    std::fs::read(path).map_err(|e| StorageError::io(path, e))
}

/// Write a file atomically, creating parent directories as needed.
pub fn put_object(path: &Path, body: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let tmp_path = tmp_path(path);
    std::fs::write(&tmp_path, body).map_err(|e| StorageError::io(&tmp_path, e))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(StorageError::io(path, e));
    }
    Ok(())
}

/// Delete a single file. Returns `NotFound` if it does not exist.
pub fn delete_object(path: &Path) -> Result<(), StorageError> {
    std::fs::remove_file(path).map_err(|e| StorageError::io(path, e))
}

/// Delete a directory and everything below it.
pub fn delete_tree(path: &Path) -> Result<(), StorageError> {
    if !path.is_dir() {
        return Err(StorageError::NotFound {
            path: path.display().to_string(),
        });
    }
    std::fs::remove_dir_all(path).map_err(|e| StorageError::io(path, e))
}

/// Names of the immediate subdirectories of `dir`, sorted.
pub fn list_dirs(dir: &Path) -> Result<Vec<String>, StorageError> {
    list_entries(dir, |p| p.is_dir())
}

/// Names of the regular files in `dir` with the given extension, sorted.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<String>, StorageError> {
    list_entries(dir, |p| {
        p.is_file() && p.extension().is_some_and(|ext| ext == extension)
    })
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<String>, StorageError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StorageError::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(dir, e))?;
        let path = entry.path();
        if !keep(&path) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => {
                tracing::warn!(name = ?name, dir = %dir.display(), "skipping non-UTF-8 entry");
            }
        }
    }
    names.sort();
    Ok(names)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
