//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Require a path to exist and be a regular file.
///
/// Every tool validates its inputs up front, before any output is created.
pub fn ensure_input_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::input_file_not_found(path.display().to_string()));
    }
    Ok(())
}

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a file that must not already exist and write content to it.
///
/// Uses `create_new` so the existence check and the create are a single
/// atomic operation; an existing file is reported as `output.file_exists`
/// and is left untouched.
pub fn write_new(path: &Path, content: &str, operation: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                Error::output_file_exists(path.display().to_string())
            } else {
                Error::internal_io(e.to_string(), Some(operation.to_string()))
            }
        })?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Refuse to proceed if an output path is already taken.
///
/// Used by chart commands, where the file is ultimately created by the
/// rendering backend rather than by `write_new`.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::output_file_exists(path.display().to_string()));
    }
    Ok(())
}
