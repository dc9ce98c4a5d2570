//! Application directory resolution.
//!
//! [`AppPaths`] answers "where do I read/write file X" for the rest of the
//! application: the per-user MakeHuman folder under the user's home path,
//! the per-user data folder, and the system installation folders. It also
//! carries the default search lists for the relative-path, file-finding and
//! jailing helpers.

use std::path::{Path, PathBuf};

use crate::compare::realpath;
use crate::ensure::ensure_writable_dir;
use crate::error::PathError;
use crate::format::format_path;
use crate::home::HomeResolver;
use crate::jail;
use crate::locate;
use crate::relativize::{self, relative_between};

/// Folder name that versions the per-user file layout. Kept stable so newer
/// releases keep finding files saved by older ones.
pub const VERSION_SUBDIR: &str = "v1py3";

/// Resolver for the application's per-user and system directories.
#[derive(Debug)]
pub struct AppPaths {
    home: HomeResolver,
    sys_root: PathBuf,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Standard resolver: home seeded from the optional config file, system
    /// root at the installation directory (the current working directory).
    pub fn new() -> Self {
        Self {
            home: HomeResolver::from_config_file(),
            sys_root: PathBuf::from("."),
        }
    }

    /// Resolver with an injected home directory, system root at `.`.
    pub fn with_home(home: impl AsRef<Path>) -> Self {
        Self {
            home: HomeResolver::with_home(home),
            sys_root: PathBuf::from("."),
        }
    }

    /// Resolver with both roots injected. Intended for tests and embedders
    /// that relocate the installation directory.
    pub fn with_roots(home: impl AsRef<Path>, sys_root: impl Into<PathBuf>) -> Self {
        Self {
            home: HomeResolver::with_home(home),
            sys_root: sys_root.into(),
        }
    }

    /// The user home path. See [`HomeResolver::home_path`].
    pub fn home_path(&self) -> Result<String, PathError> {
        self.home.home_path()
    }

    /// MakeHuman folder with per-user files, located in the user home path.
    ///
    /// `sub` may be empty or a relative sub-path with forward slashes.
    pub fn user_path(&self, sub: &str) -> Result<String, PathError> {
        let mut path = PathBuf::from(self.home.home_path()?);
        if cfg!(target_os = "macos") {
            path.push("Documents");
            path.push("MakeHuman");
        } else {
            path.push("makehuman");
        }
        path.push(VERSION_SUBDIR);
        if !sub.is_empty() {
            path.push(sub);
        }
        Ok(format_path(path))
    }

    /// Per-user data folder; always the same as `user_path("data")`.
    pub fn user_data_path(&self, sub: &str) -> Result<String, PathError> {
        if sub.is_empty() {
            self.user_path("data")
        } else {
            self.user_path(&format!("data/{sub}"))
        }
    }

    /// System folder where the application is installed. Writing here
    /// usually requires admin rights; contents are shared by all users.
    pub fn sys_path(&self, sub: &str) -> String {
        if sub.is_empty() {
            format_path(&self.sys_root)
        } else {
            format_path(self.sys_root.join(sub))
        }
    }

    /// Data folder installed with the application system-wide.
    ///
    /// Do NOT assume `sys_path("data")` and `sys_data_path("")` stay
    /// interchangeable; packagers may relocate the data tree.
    pub fn sys_data_path(&self, sub: &str) -> String {
        if sub.is_empty() {
            self.sys_path("data")
        } else {
            self.sys_path(&format!("data/{sub}"))
        }
    }

    /// The path relative to the installation directory; inverse of
    /// [`crate::canonical_path`] for files under the system root.
    pub fn local_path(&self, path: impl AsRef<Path>) -> String {
        let root = realpath(Path::new(&self.sys_path("")));
        let path = realpath(path.as_ref());
        format_path(relative_between(&path, &root))
    }

    /// Create the per-user folders if missing. Run once at startup, before
    /// anything tries to save user files.
    pub fn ensure_user_dirs(&self) -> Result<(), PathError> {
        ensure_writable_dir(Path::new(&self.user_path("")?))?;
        ensure_writable_dir(Path::new(&self.user_data_path("")?))?;
        Ok(())
    }

    /// Default search list: per-user data first, system data second.
    pub fn default_search_paths(&self) -> Result<Vec<PathBuf>, PathError> {
        Ok(vec![
            PathBuf::from(self.user_data_path("")?),
            PathBuf::from(self.sys_data_path("")),
        ])
    }

    /// [`relativize::relative_path`] with the default search list when
    /// `bases` is `None`.
    pub fn relative_path(
        &self,
        path: impl AsRef<Path>,
        bases: Option<&[PathBuf]>,
        strict: bool,
    ) -> Result<Option<String>, PathError> {
        match bases {
            Some(bases) => Ok(relativize::relative_path(path, bases, strict)),
            None => {
                let defaults = self.default_search_paths()?;
                Ok(relativize::relative_path(path, &defaults, strict))
            }
        }
    }

    /// [`relativize::find_file`] with the default search list when
    /// `search_paths` is `None`.
    pub fn find_file(
        &self,
        rel_path: impl AsRef<Path>,
        search_paths: Option<&[PathBuf]>,
        strict: bool,
    ) -> Result<Option<String>, PathError> {
        match search_paths {
            Some(search_paths) => Ok(relativize::find_file(rel_path, search_paths, strict)),
            None => {
                let defaults = self.default_search_paths()?;
                Ok(relativize::find_file(rel_path, &defaults, strict))
            }
        }
    }

    /// Extensively search the data paths for `filename`, in as many ways as
    /// possible. Returns the absolute location when found, otherwise the
    /// most probable filename.
    ///
    /// With `search_default_paths` the user/system data and root folders are
    /// appended to the caller's search list.
    pub fn thorough_find_file(
        &self,
        filename: &str,
        search_paths: &[PathBuf],
        search_default_paths: bool,
    ) -> Result<String, PathError> {
        let filename = filename.replace('\\', "/");

        let mut paths = search_paths.to_vec();
        if search_default_paths {
            paths.push(PathBuf::from(self.user_data_path("")?));
            paths.push(PathBuf::from(self.sys_data_path("")));
            paths.push(PathBuf::from(self.user_path("")?));
            paths.push(PathBuf::from(self.sys_path("")));
        }

        Ok(locate::locate_in(&filename, &paths))
    }

    /// [`jail::jailed_path`] with the default jail limits (user and system
    /// data folders) when `jail_limits` is `None`.
    pub fn jailed_path(
        &self,
        filepath: impl AsRef<Path>,
        relative_to: impl AsRef<Path>,
        jail_limits: Option<&[PathBuf]>,
    ) -> Result<Option<String>, PathError> {
        match jail_limits {
            Some(limits) => Ok(jail::jailed_path(filepath, relative_to, limits)),
            None => {
                let defaults = self.default_search_paths()?;
                Ok(jail::jailed_path(filepath, relative_to, &defaults))
            }
        }
    }
}
