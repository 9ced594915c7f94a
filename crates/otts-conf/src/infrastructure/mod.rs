//! Infrastructure layer for the configuration tool.
//!
//! Contains OS-facing adapters: the terminal console, external process
//! execution, the Festival TCP probe, file-system configuration trees, and
//! loading the tool's own TOML configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `otts_conf_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.

pub mod console;
pub mod environment;
pub mod festival;
pub mod process;
pub mod storage;
pub mod tree;
