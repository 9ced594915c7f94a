//! The explicit context handed to every use case.
//!
//! Bundles the operator dialogue, the OS adapters, resolved paths and the
//! tool configuration.  Nothing in the tool is stored in globals; whatever a
//! use case needs arrives through this struct.

use std::time::Duration;

use otts_conf_core::ConfigPatcher;
use tracing::{debug, warn};

use super::paths::Paths;
use super::questions::Dialog;
use super::system::{CommandLine, CommandRunner, CommandStatus, ConfigTree, FestivalProbe};
use super::tool_config::ToolConfig;

/// Upper bound on operator-confirmed retries of a single check.
///
/// Retry questions default to "yes", so without a bound `--dont-ask` would
/// loop forever on a check that keeps failing.
pub const MAX_ATTEMPTS: usize = 3;

pub struct Context {
    pub dialog: Dialog,
    pub runner: Box<dyn CommandRunner>,
    pub festival: Box<dyn FestivalProbe>,
    pub tree: Box<dyn ConfigTree>,
    pub patcher: ConfigPatcher,
    pub paths: Paths,
    pub config: ToolConfig,
}

impl Context {
    /// Runs `command`, logging and swallowing a failure to start it.
    ///
    /// For fire-and-forget invocations such as `killall`, where the caller
    /// does not act on the outcome.
    pub fn run_quietly(&self, command: &CommandLine) -> Option<CommandStatus> {
        match self.runner.run(command) {
            Ok(status) => {
                debug!(command = %command, status = %status, "command finished");
                Some(status)
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// Kills every running daemon process.
    pub fn kill_daemons(&self) {
        let command = CommandLine::new(&self.config.commands.killall)
            .arg(&self.config.commands.daemon);
        self.run_quietly(&command);
    }

    /// Blocks for `delay`; a zero delay returns immediately.
    pub fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
