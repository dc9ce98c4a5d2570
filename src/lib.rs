//! Filesystem location resolution for the MakeHuman desktop application.
//!
//! This crate answers "where do I read/write file X" for the rest of the
//! application without callers embedding platform-specific logic:
//! - The user home path, with environment and config-file overrides
//! - Per-user and system application directories
//! - Searching, relativizing and validating paths against ordered search
//!   lists
//! - Jailing paths to a set of permitted roots, for portable material files
//!
//! # Design
//!
//! - Every path handed out is *formatted*: lexically normalized,
//!   forward-slash separated, decoded to text
//! - Ordinary "not found" conditions are `None` or a best-effort value,
//!   never an error; [`PathError`] covers the unrecoverable cases
//! - OS-specific logic stays private in `home`

mod app_dirs;
mod compare;
mod encoding;
mod ensure;
mod error;
mod format;
mod home;
mod jail;
mod locate;
mod relativize;
mod scan;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Path formatting and decoding
pub use encoding::path_to_text;
pub use format::{format_path, normalize};

// Home resolution
pub use home::{HOME_LOCATION_ENV, HomeResolver};

// Application directories
pub use app_dirs::{AppPaths, VERSION_SUBDIR};

// Path comparison
pub use compare::{canonical_path, common_prefix, is_same_path, is_sub_path};

// Search lists
pub use relativize::{find_file, relative_path};

// Bulk discovery
pub use scan::search;

// Jailing
pub use jail::jailed_path;

// Directory operations
pub use ensure::ensure_writable_dir;
