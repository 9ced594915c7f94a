//! Process environment lookups.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("HOME is not set; cannot locate the user configuration")]
    NoHome,
}

/// The operator's home directory from the value of `HOME`.
///
/// # Errors
///
/// Returns [`EnvironmentError::NoHome`] when `HOME` is unset or empty.
pub fn home_dir(home: Option<OsString>) -> Result<PathBuf, EnvironmentError> {
    home.filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .ok_or(EnvironmentError::NoHome)
}

/// Scratch directory from the value of `TMPDIR`, defaulting to `/tmp`.
pub fn temp_dir(tmpdir: Option<OsString>) -> PathBuf {
    tmpdir
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}
