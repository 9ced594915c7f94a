//! Operator console abstraction.
//!
//! The terminal implementation lives in the infrastructure layer; tests use
//! the scripted console from [`testing`].

use thiserror::Error;

/// Error type for reading operator input.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to read operator input: {0}")]
    Read(#[source] std::io::Error),
}

/// Preferences the operator chose on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorOptions {
    /// Never ask; every question takes its default answer.
    pub dont_ask: bool,
    /// Speak every message with espeak as well as printing it.
    pub use_espeak_synthesis: bool,
}

/// Line-oriented operator I/O.
pub trait Console {
    /// Shows an informational message to the operator.
    fn report(&mut self, message: &str);

    /// Signals that input is expected (an audible cue for blind operators).
    fn input_cue(&mut self) {}

    /// Reads one line of input without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;
}
