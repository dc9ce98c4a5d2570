//! Best-effort file discovery across the data search roots.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::compare::canonical_path;
use crate::format::format_path;
use crate::relativize::find_file;

/// Locate `filename` within `search_paths`, falling back through looser and
/// looser interpretations of the name.
///
/// Order: strict search-path lookup, then the name taken as an absolute or
/// working-directory-relative path, then a retry with a redundant leading
/// `data/` stripped. The retry reuses the already-expanded search list so
/// default paths are not re-appended. A miss on every step returns the
/// formatted input as the most probable name, with no guarantee it exists.
pub(crate) fn locate_in(filename: &str, search_paths: &[PathBuf]) -> String {
    if let Some(found) = find_file(filename, search_paths, true) {
        return canonical_path(found);
    }

    if Path::new(filename).is_file() {
        return canonical_path(filename);
    }

    if let Some(stripped) = filename.strip_prefix("data/") {
        let retried = locate_in(stripped, search_paths);
        if Path::new(&retried).is_file() {
            return retried;
        }
    }

    debug!(filename, "file not found in any search path");
    format_path(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_file_in_search_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("foo.obj"), b"x").unwrap();

        let found = locate_in("foo.obj", &[dir.path().to_path_buf()]);
        assert_eq!(found, canonical_path(dir.path().join("foo.obj")));
    }

    #[test]
    fn redundant_data_prefix_is_stripped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("foo.obj"), b"x").unwrap();

        let found = locate_in("data/foo.obj", &[dir.path().to_path_buf()]);
        assert_eq!(found, canonical_path(dir.path().join("foo.obj")));
    }

    #[test]
    fn absolute_filename_is_accepted_directly() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("direct.mhmat");
        fs::write(&file, b"x").unwrap();

        let found = locate_in(file.to_str().unwrap(), &[]);
        assert_eq!(found, canonical_path(&file));
    }

    #[test]
    fn miss_returns_formatted_best_guess() {
        let dir = tempdir().unwrap();
        let found = locate_in("no/./such.obj", &[dir.path().to_path_buf()]);
        assert_eq!(found, "no/such.obj");
    }
}
