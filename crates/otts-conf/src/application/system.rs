//! Abstractions over the operating system used by the use cases.
//!
//! Each trait has one production implementation in the infrastructure layer
//! and a `mockall` mock for unit tests.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

// ── Commands ──────────────────────────────────────────────────────────────────

/// A program invocation: executable name plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.display().to_string())
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// How a finished command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Error type for running external commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started at all (usually not installed).
    #[error("cannot execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs external programs and waits for them to finish.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandStatus, CommandError>;
}

// ── Festival ──────────────────────────────────────────────────────────────────

/// What a successful Festival probe found out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalStatus {
    /// Whether festival-freebsoft-utils answered the `require` probe.
    pub freebsoft_utils: bool,
}

/// Error type for Festival server probes.
#[derive(Debug, Error)]
pub enum FestivalError {
    #[error("cannot resolve {host}:{port}")]
    Resolve { host: String, port: u16 },

    #[error("connection to {address} failed: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Festival did not answer: {0}")]
    Exchange(#[source] std::io::Error),
}

/// Probes a Festival server over its TCP command interface.
#[cfg_attr(test, mockall::automock)]
pub trait FestivalProbe {
    fn probe(&self, host: &str, port: u16, timeout: Duration)
        -> Result<FestivalStatus, FestivalError>;
}

// ── Configuration trees ───────────────────────────────────────────────────────

/// Error type for file-system operations on configuration trees.
#[derive(Debug, Error)]
#[error("{operation} {path}: {source}")]
pub struct TreeError {
    pub operation: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl TreeError {
    pub fn new(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// File-system operations on configuration directories.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigTree {
    fn exists(&self, path: &Path) -> bool;

    /// Number of entries directly inside `dir`.
    fn entry_count(&self, dir: &Path) -> Result<usize, TreeError>;

    fn create_dir(&self, dir: &Path) -> Result<(), TreeError>;

    /// Recursively copies `from` to `to`; `to` must not exist yet.
    fn copy_tree(&self, from: &Path, to: &Path) -> Result<(), TreeError>;

    /// Recursively removes `dir`.  A missing directory is not an error.
    fn remove_tree(&self, dir: &Path) -> Result<(), TreeError>;

    /// Copies a single file, creating the destination directory if needed.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), TreeError>;

    /// Makes `path` readable by its owner only.
    fn restrict_to_owner(&self, path: &Path) -> Result<(), TreeError>;
}
