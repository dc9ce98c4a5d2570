//! Canonical text form for paths.
//!
//! Raw paths are platform native: possibly backslash-separated, possibly
//! carrying redundant `.`/`..` components. The formatted form is lexically
//! normalized, forward-slash separated and decoded to text; every path this
//! crate hands out is formatted.

use std::path::{Component, Path, PathBuf};

use crate::encoding::path_to_text;

/// Lexically normalize a path: collapse redundant separators and `.`
/// components and resolve `..` against preceding components.
///
/// Purely textual; symlinks are not consulted. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Return the formatted form of a path: normalized, decoded to text, with
/// all backslashes replaced by forward slashes.
///
/// Idempotent. Callers holding an `Option` get the pass-through behavior
/// with `opt.map(format_path)`.
pub fn format_path(path: impl AsRef<Path>) -> String {
    let normalized = normalize(path.as_ref());
    path_to_text(normalized.as_os_str()).replace('\\', "/")
}
