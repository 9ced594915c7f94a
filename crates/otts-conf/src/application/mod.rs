//! Application layer use cases for the configuration tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! Use cases in this layer orchestrate the patcher from `otts-conf-core` and
//! the operator dialogue to fulfil a goal such as "create a user
//! configuration" or "check whether audio works".  They reach the outside
//! world only through the traits in [`system`] and [`console`], so every
//! use case can be tested with mocks and a scripted console.
//!
//! # Sub-modules
//!
//! - **`console`** / **`questions`** – Operator I/O and the question/answer
//!   engine with default handling.
//! - **`system`** – Traits for running commands, probing Festival, and
//!   manipulating configuration trees.
//! - **`paths`** / **`tool_config`** – Where things live and how the tool is
//!   configured.
//! - **`user_config`**, **`basic_settings`**, **`daemon`**,
//!   **`diagnostics`**, **`debug_report`** – The individual use cases.
//! - **`wizard`** – Top-level flows that chain the use cases together.

pub mod basic_settings;
pub mod console;
pub mod context;
pub mod daemon;
pub mod debug_report;
pub mod diagnostics;
pub mod error;
pub mod paths;
pub mod questions;
pub mod system;
pub mod tool_config;
pub mod user_config;
pub mod wizard;

pub use context::Context;
pub use error::WizardError;
pub use paths::{Paths, Target};
