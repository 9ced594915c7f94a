//! # otts-conf-core
//!
//! Shared library for the OpenTTS configuration tool containing the setting
//! model and the line-oriented configuration patcher.
//!
//! This crate knows nothing about prompts, processes or sockets.  The only
//! I/O it performs is reading and replacing the configuration file handed to
//! [`ConfigPatcher::patch`].
//!
//! # Architecture overview (for beginners)
//!
//! `openttsd.conf` is a plain text file.  Real settings are written as
//! `<SettingName> <value>`, and the shipped file is full of comments that
//! mention the same setting names, often as commented-out examples.  The
//! configuration tool has to change a handful of values without disturbing
//! anything else.
//!
//! - **`domain`** – The values the operator chose ([`SettingValue`]), the
//!   set of settings to change ([`SettingRequest`]) and the rule that decides
//!   whether a line is a real assignment ([`domain::line::assigns`]).
//!
//! - **`patcher`** – Applies a request to text ([`patch_text`]) or to a file
//!   on disk ([`ConfigPatcher`]), keeping a `.bak` copy of the original.

pub mod domain;
pub mod patcher;

// Re-export the most-used types at the crate root so callers can write
// `otts_conf_core::SettingRequest` instead of the full module path.
pub use domain::setting::{SettingRequest, SettingValue};
pub use patcher::config_patcher::{
    backup_path, patch_text, ConfigPatcher, PatchError, PatchOutcome, BACKUP_SUFFIX,
};
