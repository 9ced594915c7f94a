//! Error type shared by the use cases.
//!
//! Check failures (no sound, Festival down) are not errors: they are reported
//! to the operator and returned as `false`.  `WizardError` covers the cases
//! where the tool itself cannot go on.

use otts_conf_core::PatchError;
use thiserror::Error;

use super::console::ConsoleError;
use super::system::{CommandError, TreeError};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
