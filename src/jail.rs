//! Confining paths to permitted root directories.
//!
//! Jailed paths are portable: a material or clothing file can reference its
//! textures relative to a data root without disclosing anything about the
//! directory layout above it.

use std::path::Path;

use crate::compare::{is_sub_path, realpath};
use crate::relativize::relative_path;

/// Relative form of `filepath` against `relative_to`, confined within the
/// `jail_limits` roots.
///
/// The input is symlink-resolved first; home directories reached through
/// symlinks would otherwise defeat the containment checks. A path inside at
/// least one limit is relativized against `relative_to` when possible, else
/// against the limits themselves. A path outside every limit yields `None`.
pub fn jailed_path<P: AsRef<Path>>(
    filepath: impl AsRef<Path>,
    relative_to: impl AsRef<Path>,
    jail_limits: &[P],
) -> Option<String> {
    let filepath = realpath(filepath.as_ref());

    if !jail_limits.iter().any(|limit| is_sub_path(&filepath, limit)) {
        return None;
    }

    if let Some(rel) = relative_path(&filepath, &[relative_to.as_ref()], true) {
        return Some(rel);
    }
    relative_path(&filepath, jail_limits, false)
}
