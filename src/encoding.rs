//! Decoding of raw path data into text.
//!
//! Paths leaving this crate are plain `String`s fit for use in the GUI and
//! in portable material files. Decoding never fails: strategies are tried in
//! order and the terminal lossy step always produces a value.

use std::ffi::OsStr;

/// Decode a raw path into text.
///
/// Tries strict UTF-8 first; the terminal fallback is lossy decoding, which
/// substitutes undecodable sequences rather than raising.
pub fn path_to_text(path: &OsStr) -> String {
    match path.to_str() {
        Some(text) => text.to_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
