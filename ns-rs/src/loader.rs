//! Script source loading.
//!
//! Reads a script from disk, turning a missing file into
//! [`LoadError::NotFound`] so the entry point can report it separately from
//! other I/O failures.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;

/// Read the whole script at `path` as UTF-8 text.
pub fn load_script(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
