//! Bulk file discovery by extension.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::format::format_path;

/// Index of a file's extension within the caller's precedence list, if the
/// extension is listed at all. Matching is case-insensitive.
fn extension_index(extensions: &[String], path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    extensions.iter().position(|candidate| *candidate == ext)
}

fn walk(roots: Vec<PathBuf>, recursive: bool) -> impl Iterator<Item = PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    roots.into_iter().flat_map(move |root| {
        WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            // unreadable subtrees are skipped, matching a plain directory walk
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
    })
}

/// Search for files with the given extensions under the given paths.
///
/// Extensions are matched case-insensitively and may be written with or
/// without a leading dot. The returned sequence is lazy and finite; calling
/// again produces a fresh traversal. Traversal order follows the underlying
/// directory walk and is unspecified.
///
/// With `mutex_extensions`, files differing only by extension are
/// de-duplicated: the traversal runs to completion first, and for each base
/// name only the file whose extension is listed earliest in `extensions` is
/// kept, emitted under its on-disk name.
pub fn search<P: AsRef<Path>>(
    paths: &[P],
    extensions: &[&str],
    recursive: bool,
    mutex_extensions: bool,
) -> Box<dyn Iterator<Item = String>> {
    let extensions: Vec<String> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect();
    let roots: Vec<PathBuf> = paths.iter().map(|path| path.as_ref().to_path_buf()).collect();

    if mutex_extensions {
        let mut order: Vec<String> = Vec::new();
        let mut best: HashMap<String, (usize, String)> = HashMap::new();
        for path in walk(roots, recursive) {
            let Some(index) = extension_index(&extensions, &path) else {
                continue;
            };
            // keep the on-disk name so the emitted path stays openable
            let text = format_path(&path);
            let base = format_path(path.with_extension(""));
            match best.get_mut(&base) {
                Some((kept, kept_path)) => {
                    if index < *kept {
                        *kept = index;
                        *kept_path = text;
                    }
                }
                None => {
                    best.insert(base.clone(), (index, text));
                    order.push(base);
                }
            }
        }
        let found: Vec<String> = order
            .into_iter()
            .filter_map(|base| best.remove(&base))
            .map(|(_, path)| path)
            .collect();
        Box::new(found.into_iter())
    } else {
        Box::new(
            walk(roots, recursive)
                .filter(move |path| extension_index(&extensions, path).is_some())
                .map(format_path),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn finds_matching_extensions_recursively() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        touch(&dir.path().join("a.obj"));
        touch(&dir.path().join("sub/b.mhclo"));
        touch(&dir.path().join("sub/deeper/c.obj"));
        touch(&dir.path().join("sub/skip.txt"));

        let mut found: Vec<String> =
            search(&[dir.path()], &["obj", "mhclo"], true, false).collect();
        found.sort();
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|f| f.ends_with(".obj") || f.ends_with(".mhclo")));
    }

    #[test]
    fn shallow_search_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("a.obj"));
        touch(&dir.path().join("sub/b.obj"));

        let found: Vec<String> = search(&[dir.path()], &["obj"], false, false).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.obj"));
    }

    #[test]
    fn extensions_match_with_dot_and_mixed_case() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.OBJ"));

        let found: Vec<String> = search(&[dir.path()], &[".obj"], true, false).collect();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn mutex_extensions_keep_earliest_listed() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.obj"));
        touch(&dir.path().join("a.mhclo"));

        let found: Vec<String> = search(&[dir.path()], &["obj", "mhclo"], true, true).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.obj"));

        let found: Vec<String> = search(&[dir.path()], &["mhclo", "obj"], true, true).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.mhclo"));
    }

    #[test]
    fn mutex_scan_emits_on_disk_names() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("A.OBJ"));

        let found: Vec<String> = search(&[dir.path()], &["obj", "mhclo"], true, true).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("A.OBJ"), "got {}", found[0]);
        assert!(Path::new(&found[0]).exists());
    }

    #[test]
    fn search_is_restartable() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.obj"));

        let first: Vec<String> = search(&[dir.path()], &["obj"], true, false).collect();
        let second: Vec<String> = search(&[dir.path()], &["obj"], true, false).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        let found: Vec<String> = search(&[missing], &["obj"], true, false).collect();
        assert!(found.is_empty());
    }
}
