//! TOML-based loading of the tool configuration.
//!
//! Reads [`ToolConfig`] from, in order of preference:
//! - the path given with `--config` (must exist), or
//! - `$XDG_CONFIG_HOME/otts-conf/config.toml`, or
//! - `~/.config/otts-conf/config.toml`.
//!
//! A missing file at the default location is not an error: every field has a
//! built-in default, so the tool works on a stock installation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::application::tool_config::ToolConfig;

/// Error type for tool configuration loading.
#[derive(Debug, Error)]
pub enum ToolConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default location of the configuration file, from the values of
/// `XDG_CONFIG_HOME` and `HOME`.  `None` when neither is set.
pub fn config_file_path(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("otts-conf").join("config.toml"))
}

/// Loads the tool configuration.
///
/// With `explicit` set, that file must exist.  Otherwise the default
/// location is tried and a missing file yields [`ToolConfig::default`].
///
/// # Errors
///
/// Returns [`ToolConfigError::Io`] for file-system errors and
/// [`ToolConfigError::Parse`] if the TOML is malformed.
pub fn load_tool_config(explicit: Option<&Path>) -> Result<ToolConfig, ToolConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match config_file_path(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME")) {
            Some(path) => read_config_or_default(&path),
            None => Ok(ToolConfig::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<ToolConfig, ToolConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ToolConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ToolConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_config_or_default(path: &Path) -> Result<ToolConfig, ToolConfigError> {
    match read_config(path) {
        Err(ToolConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no tool configuration, using defaults");
            Ok(ToolConfig::default())
        }
        other => other,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
