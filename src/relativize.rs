//! Relative paths against ordered search lists, and the inverse lookup.

use std::path::{Path, PathBuf};

use crate::compare::{is_sub_path, realpath};
use crate::encoding::path_to_text;
use crate::format::format_path;

/// Relative form of `path` between two already-canonical absolute paths.
pub(crate) fn relative_between(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<_> = path.components().collect();
    let base_components: Vec<_> = base.components().collect();
    let shared = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base_components.len() {
        out.push("..");
    }
    for component in &path_components[shared..] {
        out.push(component.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Return `path` relative to one of the `bases`.
///
/// All bases are examined and the LAST one containing the path is retained;
/// later entries deliberately take precedence over earlier ones. With no
/// containing base the result is `None` when `strict`, else the original
/// path unchanged. The non-strict fallback is decoded but intentionally NOT
/// formatted, so callers get their input back verbatim and can tell a miss
/// from a resolved path.
pub fn relative_path<P: AsRef<Path>>(
    path: impl AsRef<Path>,
    bases: &[P],
    strict: bool,
) -> Option<String> {
    let path = path.as_ref();

    let mut matched: Option<&Path> = None;
    for base in bases {
        if is_sub_path(path, base) {
            matched = Some(base.as_ref());
        }
    }

    let Some(base) = matched else {
        return if strict {
            None
        } else {
            Some(path_to_text(path.as_os_str()))
        };
    };

    let base = realpath(base);
    let path = realpath(path);
    Some(format_path(relative_between(&path, &base)))
}

/// Inverse of [`relative_path`]: find an absolute path for `rel_path` in one
/// of the `search_paths`.
///
/// The first search path whose join names an existing file wins, so order
/// matters. The current working directory is not consulted unless `.` is
/// given explicitly as a search path. With no match the result is `None`
/// when `strict`, else the original `rel_path` unchanged — decoded but
/// intentionally NOT formatted, so a miss hands the caller's input back
/// verbatim.
pub fn find_file<P: AsRef<Path>>(
    rel_path: impl AsRef<Path>,
    search_paths: &[P],
    strict: bool,
) -> Option<String> {
    let rel_path = rel_path.as_ref();

    for search_path in search_paths {
        let candidate = search_path.as_ref().join(rel_path);
        if candidate.is_file() {
            return Some(format_path(candidate));
        }
    }

    if strict {
        None
    } else {
        Some(path_to_text(rel_path.as_os_str()))
    }
}
