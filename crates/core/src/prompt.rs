//! The retry-until-valid engine.
//!
//! Every typed prompt in this crate is a [`Validator`] plugged into
//! [`Console::prompt`], which writes the prompt, reads a line, and either
//! returns the parsed value or prints the [`Rejection`] and asks again.
//! There is no retry limit: the loop only ends on a valid value, or when the
//! console itself fails (closed stream, I/O error).

use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::config::{SEPARATOR, STRING_PROMPT};
use crate::console::Console;
use crate::error::{Error, Result};

/// Why a line of input was refused. The `Display` text is printed verbatim
/// to the operator before the prompt repeats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Input must not be empty!")]
    Empty,

    #[error("Input must be a number!")]
    NotANumber,

    #[error("Input must not be a floating point number!")]
    FloatingPoint,

    #[error("Input must be from {} to {}!", .min, .max)]
    OutOfRange { min: String, max: String },

    #[error("Input must be a single character!")]
    NotSingleCharacter,

    #[error("Input must be {} or {}!", .true_token, .false_token)]
    NotBoolean {
        true_token: String,
        false_token: String,
    },

    #[error("Enter at least one entry!")]
    NoEntries,

    #[error("All entries must be of type int, separated by {}", .0)]
    NotIntArray(String),

    #[error("IP must consist of exactly 32 digits long")]
    BinaryAddressLength,

    #[error("IP must consist of only 1s and 0s")]
    BinaryAddressDigits,

    #[error("IP must consist of 4 octets, separated by a \".\"")]
    OctetCount,

    #[error("Each octet must consist of no more than 3 numbers")]
    OctetLength,

    #[error("Each octet must be in the range 0-255")]
    OctetRange,

    #[error("Each octet must be a number")]
    OctetNotNumber,

    #[error("IP must consist of exactly 8 digits")]
    HexAddressLength,
}

/// The result of validating one line: a typed value or a diagnostic.
pub type Outcome<T> = std::result::Result<T, Rejection>;

/// A parse-and-validate policy for one kind of answer.
///
/// Plain functions and closures of type `Fn(&str) -> Outcome<T>` are
/// validators too, so one-off rules don't need a dedicated type.
pub trait Validator {
    type Output;

    /// Turns a raw line into a value, or explains why it can't.
    fn validate(&self, input: &str) -> Outcome<Self::Output>;
}

impl<T, F> Validator for F
where
    F: Fn(&str) -> Outcome<T>,
{
    type Output = T;

    fn validate(&self, input: &str) -> Outcome<T> {
        self(input)
    }
}

/// What to show the operator, and whether a blank answer is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    text: String,
    allow_empty: bool,
    append_separator: bool,
}

impl PromptRequest {
    /// Creates a request that refuses empty answers and appends `": "`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrompt`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyPrompt);
        }

        Ok(Self {
            text,
            allow_empty: false,
            append_separator: true,
        })
    }

    #[must_use]
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    #[must_use]
    pub fn append_separator(mut self, append_separator: bool) -> Self {
        self.append_separator = append_separator;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// The prompt exactly as it is written to the terminal.
    #[must_use]
    pub fn displayed(&self) -> String {
        if self.append_separator {
            format!("{}{SEPARATOR}", self.text)
        } else {
            self.text.clone()
        }
    }
}

fn accept_any(input: &str) -> Outcome<String> {
    Ok(input.to_string())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts until `validator` accepts a line and returns its value.
    ///
    /// Each iteration writes the prompt once and, on refusal, exactly one
    /// diagnostic line.
    ///
    /// # Errors
    ///
    /// Only fails when the console does: [`Error::StreamClosed`] at
    /// end-of-input or [`Error::Stdio`] on a read/write failure.
    pub fn prompt<V: Validator>(
        &mut self,
        request: &PromptRequest,
        validator: &V,
    ) -> Result<V::Output> {
        let displayed = request.displayed();

        loop {
            self.write_prompt(&displayed)?;
            let line = self.read_line()?;

            let outcome = if !request.allows_empty() && line.is_empty() {
                Err(Rejection::Empty)
            } else {
                validator.validate(&line)
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!("Rejected {line:?} for `{}`: {rejection}", request.text());
                    self.write_line(&rejection)?;
                }
            }
        }
    }

    /// Prompts for free text, returned exactly as typed.
    ///
    /// # Errors
    ///
    /// See [`Console::prompt`].
    pub fn prompt_for_input(&mut self, request: &PromptRequest) -> Result<String> {
        self.prompt(request, &accept_any)
    }

    /// Prompts for a non-empty string with the default prompt.
    ///
    /// # Errors
    ///
    /// See [`Console::prompt`].
    pub fn prompt_for_string(&mut self) -> Result<String> {
        self.prompt_for_input(&PromptRequest::new(STRING_PROMPT)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_prompt_request_rejects_empty_text() {
        assert!(matches!(PromptRequest::new(""), Err(Error::EmptyPrompt)));
    }

    #[test]
    fn test_prompt_request_display() {
        let request = PromptRequest::new("Name").unwrap();
        assert_eq!(request.displayed(), "Name: ");
        assert!(!request.allows_empty());

        let bare = request.append_separator(false);
        assert_eq!(bare.displayed(), "Name");
    }

    #[test]
    fn test_empty_line_is_rejected_when_not_allowed() {
        let mut console = scripted("\nBob\n");
        let request = PromptRequest::new("Name").unwrap();

        assert_eq!(console.prompt_for_input(&request).unwrap(), "Bob");
        assert_eq!(
            transcript(console),
            "Name: Input must not be empty!\nName: "
        );
    }

    #[test]
    fn test_empty_line_is_returned_when_allowed() {
        let mut console = scripted("\n");
        let request = PromptRequest::new("Name").unwrap().allow_empty(true);
        assert_eq!(console.prompt_for_input(&request).unwrap(), "");
    }

    #[test]
    fn test_whitespace_only_line_is_not_empty() {
        let mut console = scripted(" \n");
        let request = PromptRequest::new("Name").unwrap();
        assert_eq!(console.prompt_for_input(&request).unwrap(), " ");
    }

    #[test]
    fn test_closure_validator_retries_until_accepted() {
        let mut console = scripted("no\nnope\nyes\n");
        let request = PromptRequest::new("Say yes").unwrap();
        let only_yes = |input: &str| -> Outcome<bool> {
            if input == "yes" {
                Ok(true)
            } else {
                Err(Rejection::NotBoolean {
                    true_token: "yes".to_string(),
                    false_token: "yes".to_string(),
                })
            }
        };

        assert!(console.prompt(&request, &only_yes).unwrap());
        let output = transcript(console);
        assert_eq!(output.matches("Say yes: ").count(), 3);
        assert_eq!(output.matches("Input must be yes or yes!\n").count(), 2);
    }

    #[test]
    fn test_stream_closed_is_propagated() {
        let mut console = scripted("\n");
        let request = PromptRequest::new("Name").unwrap();
        assert!(matches!(
            console.prompt_for_input(&request),
            Err(Error::StreamClosed)
        ));
    }

    #[test]
    fn test_prompt_for_string_uses_default_prompt() {
        let mut console = scripted("hello world\n");
        assert_eq!(console.prompt_for_string().unwrap(), "hello world");
        assert_eq!(transcript(console), "Enter a string: ");
    }
}
