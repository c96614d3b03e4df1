//! File system helpers for project scaffolding.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Check if a file exists in a directory
pub fn has_file(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}

/// Write `content` to `dest` unless the file already exists.
///
/// Returns `true` when the file was written, `false` when an existing
/// file was left untouched.
pub fn write_if_missing(dest: &Path, content: &str) -> Result<bool> {
    if dest.exists() {
        return Ok(false);
    }
    fs::write(dest, content)?;
    Ok(true)
}

/// Copy `src` to `dest` unless `dest` already exists.
pub fn copy_if_missing(src: &Path, dest: &Path) -> Result<bool> {
    if dest.exists() {
        return Ok(false);
    }
    fs::copy(src, dest)?;
    Ok(true)
}
