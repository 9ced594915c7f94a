//! Storage infrastructure: the tool's own configuration file.
//!
//! The `config` sub-module reads the TOML file from `--config` or the XDG
//! location and falls back to built-in defaults when it does not exist.
//! The daemon's `openttsd.conf` is not handled here; that is the patcher's
//! job in `otts-conf-core`.

pub mod config;
