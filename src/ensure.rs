//! Creation of the per-user directory tree.
//!
//! The application prepares its per-user folders once at startup, before
//! anything tries to save user files; anything beyond "make it exist and be
//! writable" is left to the caller.

use std::fs;
use std::path::Path;

use crate::error::PathError;

/// Create `path` (and any missing parents) and verify the application can
/// write into it.
pub fn ensure_writable_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    verify_writable(path)
}

/// Writability check: saving a marker file is the only reliable answer on
/// all platforms.
fn verify_writable(path: &Path) -> Result<(), PathError> {
    let marker = path.join(".mh_write_test");
    fs::write(&marker, b"mh").map_err(|e| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let _ = fs::remove_file(&marker);
    Ok(())
}
