//! Canonical path comparison.
//!
//! Containment and equality checks work on canonical forms: symlinks
//! resolved, lexically normalized, formatted. Comparison is segment-wise so
//! that `/home/user2` is never mistaken for a subpath of `/home/user`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{format_path, normalize};

/// Make a path absolute without touching the filesystem.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        match env::current_dir() {
            Ok(cwd) => normalize(&cwd.join(path)),
            Err(_) => normalize(path),
        }
    }
}

/// Resolve symlinks in a path, tolerating non-existing components.
///
/// `fs::canonicalize` is used for the deepest existing ancestor; the
/// remaining components are appended unchanged. Never fails: a path with no
/// existing ancestor is returned in absolute, normalized form.
pub(crate) fn realpath(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }

    let absolute = absolutize(path);
    let mut existing = absolute.as_path();
    let mut tail = Vec::new();
    loop {
        match fs::canonicalize(existing) {
            Ok(mut real) => {
                for name in tail.iter().rev() {
                    real.push(name);
                }
                return real;
            }
            Err(_) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name.to_os_string());
                    existing = parent;
                }
                _ => return absolute,
            },
        }
    }
}

/// Canonical name for the location specified by `path`.
///
/// Useful for comparing paths: two references to the same location always
/// canonicalize to the same string.
pub fn canonical_path(path: impl AsRef<Path>) -> String {
    format_path(realpath(path.as_ref()))
}

/// Longest common directory prefix of `paths`, split on `sep`.
///
/// Comparison is per segment, not per character, so sibling directories with
/// a shared name prefix have no common prefix beyond their parent.
pub fn common_prefix(paths: &[&str], sep: char) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };
    let segments: Vec<&str> = first.split(sep).collect();
    let mut keep = segments.len();
    for path in rest {
        let matched = segments
            .iter()
            .zip(path.split(sep))
            .take_while(|(a, b)| **a == *b)
            .count();
        keep = keep.min(matched);
    }
    segments[..keep].join(&sep.to_string())
}

/// Verify whether `sub` is located within `base`.
pub fn is_sub_path(sub: impl AsRef<Path>, base: impl AsRef<Path>) -> bool {
    let sub = canonical_path(sub);
    let base = canonical_path(base);
    common_prefix(&[&sub, &base], '/') == base
}

/// Determine whether two paths point to the same location.
pub fn is_same_path(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    canonical_path(a) == canonical_path(b)
}
