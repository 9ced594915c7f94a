//! Question/answer engine.
//!
//! Every question shows its default in brackets and returns it on an empty
//! answer, at end of input, or when the operator asked not to be asked at
//! all.  The default also fixes the type of the answer through the [`Reply`]
//! trait:
//!
//! ```text
//! Default speech rate [0] :
//! >
//! ```

use std::fmt::Debug;

use tracing::debug;

use super::console::{Console, ConsoleError, OperatorOptions};

/// Words accepted as a positive answer to a yes/no question.
const YES_WORDS: [&str; 6] = ["yes", "y", "Y", "true", "t", "1"];
/// Words accepted as a negative answer to a yes/no question.
const NO_WORDS: [&str; 6] = ["no", "n", "N", "false", "f", "0"];

/// A type that can be the answer to a question.
pub trait Reply: Clone + PartialEq + Debug {
    /// How the default is shown between the brackets.
    fn render(&self) -> String;

    /// Parses typed input.  On failure returns the message shown to the
    /// operator before asking again.
    fn parse_reply(input: &str) -> Result<Self, String>;
}

impl Reply for bool {
    fn render(&self) -> String {
        let word = if *self { "yes" } else { "no" };
        word.to_string()
    }

    fn parse_reply(input: &str) -> Result<Self, String> {
        if YES_WORDS.contains(&input) {
            Ok(true)
        } else if NO_WORDS.contains(&input) {
            Ok(false)
        } else {
            Err("Unknown answer (type 'yes' or 'no')".to_string())
        }
    }
}

impl Reply for i64 {
    fn render(&self) -> String {
        self.to_string()
    }

    fn parse_reply(input: &str) -> Result<Self, String> {
        input
            .trim()
            .parse()
            .map_err(|_| format!("'{input}' is not a whole number, please try again"))
    }
}

impl Reply for String {
    fn render(&self) -> String {
        self.clone()
    }

    fn parse_reply(input: &str) -> Result<Self, String> {
        Ok(input.to_string())
    }
}

/// The operator dialogue: reports plus questions with defaults.
pub struct Dialog {
    console: Box<dyn Console>,
    dont_ask: bool,
}

impl Dialog {
    pub fn new(console: Box<dyn Console>, options: OperatorOptions) -> Self {
        Self {
            console,
            dont_ask: options.dont_ask,
        }
    }

    /// Shows a message to the operator.
    pub fn report(&mut self, message: impl AsRef<str>) {
        self.console.report(message.as_ref());
    }

    /// Asks `text` and returns the typed answer, or `default` on empty input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if reading the operator's input fails.
    pub fn question<T: Reply>(&mut self, text: &str, default: T) -> Result<T, ConsoleError> {
        loop {
            self.console
                .report(&format!("{text} [{}] :", default.render()));
            self.console.input_cue();

            if self.dont_ask {
                return Ok(default);
            }

            let input = match self.console.read_line(">")? {
                Some(line) => line,
                None => {
                    debug!(question = text, "end of input, using default");
                    return Ok(default);
                }
            };
            if input.is_empty() {
                return Ok(default);
            }

            match T::parse_reply(&input) {
                Ok(value) => return Ok(value),
                Err(message) => self.console.report(&message),
            }
        }
    }

    /// Asks `text`; if the answer is not among `suggest` the operator may
    /// correct it or keep the unusual value.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if reading the operator's input fails.
    pub fn question_with_suggested_answers<T: Reply>(
        &mut self,
        text: &str,
        default: T,
        suggest: &[T],
    ) -> Result<T, ConsoleError> {
        let mut reply = self.question(text, default.clone())?;
        while !suggest.contains(&reply) {
            self.report(format!(
                "The value you have chosen is not among the suggested values.\nYou have chosen '{}'.",
                reply.render()
            ));
            self.report(format!("The suggested values are {}", render_list(suggest)));
            if self.question("Do you want to correct your answer?", true)? {
                reply = self.question(text, default.clone())?;
            } else {
                return Ok(reply);
            }
        }
        Ok(reply)
    }

    /// Asks `text` until the answer is one of `required`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if reading the operator's input fails.
    pub fn question_with_required_answers<T: Reply>(
        &mut self,
        text: &str,
        default: T,
        required: &[T],
    ) -> Result<T, ConsoleError> {
        let mut reply = self.question(text, default.clone())?;
        while !required.contains(&reply) {
            self.report(format!(
                "You have chosen '{}'. Please choose one of {}",
                reply.render(),
                render_list(required)
            ));
            reply = self.question(text, default.clone())?;
        }
        Ok(reply)
    }
}

fn render_list<T: Reply>(values: &[T]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v.render())).collect();
    format!("[{}]", quoted.join(", "))
}
