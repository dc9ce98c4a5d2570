//! User home path resolution.
//!
//! The "home" path is where per-user MakeHuman files live. It is resolved
//! once per resolver and memoized, with two override channels checked
//! before any platform lookup:
//!
//! 1. The `MH_HOME_LOCATION` environment variable, re-checked on every call.
//! 2. An optional single-line config file at a platform default location,
//!    read once when the resolver is constructed.
//!
//! Platform lookups go through the `dirs` crate: the documents directory on
//! Windows (backed by the user's "Personal" shell folder), the XDG documents
//! directory on Linux when it exists on disk, and the plain home directory
//! everywhere else.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::PathError;
use crate::format::format_path;

/// Environment variable that supersedes any other home folder setting.
pub const HOME_LOCATION_ENV: &str = "MH_HOME_LOCATION";

/// Resolves and memoizes the user home path.
///
/// Injectable: tests and embedders can construct one with a fixed home
/// directory instead of relying on process-wide environment state.
#[derive(Debug, Default)]
pub struct HomeResolver {
    cached: Mutex<Option<String>>,
}

impl HomeResolver {
    /// Resolver with an empty cache; the home path is computed lazily.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a pre-resolved home path.
    pub fn with_home(path: impl AsRef<Path>) -> Self {
        Self {
            cached: Mutex::new(Some(format_path(path))),
        }
    }

    /// Resolver seeded from the optional config file, when that file names
    /// an existing directory. Invalid or unreadable seed files are skipped.
    pub fn from_config_file() -> Self {
        let seeded = config_file_path().as_deref().and_then(read_home_override);
        Self {
            cached: Mutex::new(seeded),
        }
    }

    /// Find the user home path.
    ///
    /// The environment override wins over everything and is re-checked on
    /// every call; otherwise the memoized value is returned, falling back to
    /// a platform lookup on first use. No home directory at all is the one
    /// unrecoverable condition.
    pub fn home_path(&self) -> Result<String, PathError> {
        if let Ok(alt) = env::var(HOME_LOCATION_ENV) {
            if Path::new(&alt).is_dir() {
                let home = format_path(&alt);
                debug!(home = %home, "home path overridden by {HOME_LOCATION_ENV}");
                *self.cached.lock().unwrap() = Some(home.clone());
                return Ok(home);
            }
        }

        if let Some(cached) = self.cached.lock().unwrap().clone() {
            return Ok(cached);
        }

        let home = platform_home()?;
        *self.cached.lock().unwrap() = Some(home.clone());
        Ok(home)
    }
}

/// Location of the optional config file naming an alternate home folder.
///
/// The file holds a single line with an absolute directory path, UTF-8
/// encoded.
fn config_file_path() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        dirs::config_dir().map(|dir| dir.join("makehuman.conf"))
    } else if cfg!(target_os = "macos") {
        dirs::config_dir().map(|dir| dir.join("MakeHuman").join("makehuman.conf"))
    } else if cfg!(windows) {
        dirs::data_local_dir().map(|dir| dir.join("makehuman.conf"))
    } else {
        None
    }
}

/// Read a home override from a seed file, if it names an existing directory.
fn read_home_override(file: &Path) -> Option<String> {
    if !file.is_file() {
        return None;
    }
    match fs::read_to_string(file) {
        Ok(contents) => {
            let line = contents.lines().next().unwrap_or("").trim();
            if !line.is_empty() && Path::new(line).is_dir() {
                debug!(file = %file.display(), "home path seeded from config file");
                Some(format_path(line))
            } else {
                None
            }
        }
        Err(err) => {
            warn!(file = %file.display(), error = %err, "cannot read home config file");
            None
        }
    }
}

#[cfg(windows)]
fn platform_home() -> Result<String, PathError> {
    // Documents folder, backed by the user's "Personal" shell folder
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .map(format_path)
        .ok_or(PathError::NoHomeDir)
}

#[cfg(target_os = "linux")]
fn platform_home() -> Result<String, PathError> {
    match dirs::document_dir() {
        Some(documents) if documents.is_dir() => Ok(format_path(documents)),
        _ => dirs::home_dir().map(format_path).ok_or(PathError::NoHomeDir),
    }
}

#[cfg(not(any(windows, target_os = "linux")))]
fn platform_home() -> Result<String, PathError> {
    dirs::home_dir().map(format_path).ok_or(PathError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn injected_home_is_returned_as_given() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(HOME_LOCATION_ENV);
        let resolver = HomeResolver::with_home("/tmp/fake//home");
        assert_eq!(resolver.home_path().unwrap(), "/tmp/fake/home");
    }

    #[test]
    fn env_override_beats_injected_home() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(HOME_LOCATION_ENV, temp.path().to_string_lossy().as_ref());

        let resolver = HomeResolver::with_home("/tmp/other");
        assert_eq!(resolver.home_path().unwrap(), format_path(temp.path()));
    }

    #[test]
    fn env_override_pointing_nowhere_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(HOME_LOCATION_ENV, "/no/such/directory");

        let resolver = HomeResolver::with_home("/tmp/fallback");
        assert_eq!(resolver.home_path().unwrap(), "/tmp/fallback");
    }

    #[test]
    fn resolution_is_memoized() {
        let _guard = ENV_LOCK.lock().unwrap();
        let resolver = HomeResolver::new();
        let first = resolver.home_path().unwrap();
        let second = resolver.home_path().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn seed_file_naming_a_directory_is_accepted() {
        let temp = tempdir().unwrap();
        let conf = temp.path().join("makehuman.conf");
        std::fs::write(&conf, format!("{}\n", temp.path().display())).unwrap();
        assert_eq!(read_home_override(&conf), Some(format_path(temp.path())));
    }

    #[test]
    fn seed_file_naming_a_missing_directory_is_skipped() {
        let temp = tempdir().unwrap();
        let conf = temp.path().join("makehuman.conf");
        std::fs::write(&conf, "/no/such/directory\n").unwrap();
        assert_eq!(read_home_override(&conf), None);
    }

    #[test]
    fn missing_seed_file_is_skipped() {
        let temp = tempdir().unwrap();
        assert_eq!(read_home_override(&temp.path().join("absent.conf")), None);
    }
}
