//! Domain entities for the configuration tool.
//!
//! Pure types and rules with no file-system, process or terminal access, so
//! everything here can be unit-tested in isolation.

/// Setting values and the per-invocation request mapping names to values.
pub mod setting;

/// Classification of configuration lines as real assignments or pass-through text.
pub mod line;
