//! Configuration patcher: applies a [`crate::SettingRequest`] to
//! configuration text or to a configuration file on disk.

pub mod config_patcher;

pub use config_patcher::{backup_path, patch_text, ConfigPatcher, PatchError, PatchOutcome};
