//! Terminal console: messages on stdout, answers from stdin.
//!
//! With `--espeak`, every message is also spoken through the espeak
//! synthesizer and each question is preceded by a spoken "Type in", so the
//! tool can be used before any screen reader works.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::application::console::{Console, ConsoleError};
use crate::application::system::{CommandLine, CommandRunner};

/// Speaks text with an external synthesizer program.
pub struct Speaker {
    runner: Box<dyn CommandRunner>,
    program: String,
}

impl Speaker {
    pub fn new(runner: Box<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn say(&self, text: &str) {
        if let Err(e) = self.runner.run(&CommandLine::new(&self.program).arg(text)) {
            warn!("{e}");
        }
    }
}

/// [`Console`] on a line-oriented input and an output stream.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    speaker: Option<Speaker>,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(speaker: Option<Speaker>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), speaker)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, speaker: Option<Speaker>) -> Self {
        Self {
            input,
            output,
            speaker,
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            warn!("cannot write to terminal: {e}");
        }
        if let Some(speaker) = &self.speaker {
            speaker.say(message);
        }
    }

    fn input_cue(&mut self) {
        if let Some(speaker) = &self.speaker {
            speaker.say("Type in");
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{prompt}").map_err(ConsoleError::Read)?;
        self.output.flush().map_err(ConsoleError::Read)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(ConsoleError::Read)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}
