//! Running external programs with `std::process::Command`.
//!
//! Programs inherit the terminal, so players and synthesizers can print
//! their own diagnostics next to the dialogue.

use std::process::Command;

use tracing::debug;

use crate::application::system::{CommandError, CommandLine, CommandRunner, CommandStatus};

/// [`CommandRunner`] that spawns real processes and waits for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandStatus, CommandError> {
        debug!(command = %command, "running");
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| CommandError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
