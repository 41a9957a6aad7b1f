//! Delimited list prompts.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{Error, Result};
use crate::prompt::{Outcome, PromptRequest, Rejection, Validator};

/// Splits `input` on the literal `delimiter`, dropping trailing empty fields.
///
/// An empty input yields a single empty field.
///
/// ```
/// use console_ui_core::parsers::array::split_fields;
///
/// assert_eq!(split_fields("a,b,,", ","), vec!["a", "b"]);
/// assert_eq!(split_fields("a,,b", ","), vec!["a", "", "b"]);
/// assert_eq!(split_fields("", ","), vec![""]);
/// ```
#[must_use]
pub fn split_fields(input: &str, delimiter: &str) -> Vec<String> {
    if input.is_empty() {
        return vec![String::new()];
    }

    let mut fields: Vec<String> = input.split(delimiter).map(str::to_string).collect();
    while fields.last().is_some_and(String::is_empty) {
        fields.pop();
    }

    fields
}

fn non_empty_delimiter(delimiter: &str) -> Result<String> {
    if delimiter.is_empty() {
        return Err(Error::EmptyDelimiter);
    }

    Ok(delimiter.to_string())
}

/// Accepts any line and returns its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayValidator {
    delimiter: String,
}

impl ArrayValidator {
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiter`] for an empty delimiter.
    pub fn new(delimiter: &str) -> Result<Self> {
        Ok(Self {
            delimiter: non_empty_delimiter(delimiter)?,
        })
    }
}

impl Validator for ArrayValidator {
    type Output = Vec<String>;

    fn validate(&self, input: &str) -> Outcome<Vec<String>> {
        Ok(split_fields(input, &self.delimiter))
    }
}

/// Accepts a line only if every field parses as an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntArrayValidator {
    delimiter: String,
}

impl IntArrayValidator {
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiter`] for an empty delimiter.
    pub fn new(delimiter: &str) -> Result<Self> {
        Ok(Self {
            delimiter: non_empty_delimiter(delimiter)?,
        })
    }
}

impl Validator for IntArrayValidator {
    type Output = Vec<i32>;

    fn validate(&self, input: &str) -> Outcome<Vec<i32>> {
        split_fields(input, &self.delimiter)
            .iter()
            .map(|field| field.parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Rejection::NotIntArray(self.delimiter.clone()))
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts for a delimited list of strings. A blank line is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiter`] before prompting, or a console failure.
    pub fn prompt_for_array(&mut self, prompt: &str, delimiter: &str) -> Result<Vec<String>> {
        let validator = ArrayValidator::new(delimiter)?;
        let request = PromptRequest::new(prompt)?.allow_empty(true);
        self.prompt(&request, &validator)
    }

    /// Prompts for a delimited list of integers, re-prompting for the whole
    /// line if any field is not an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiter`] before prompting, or a console failure.
    pub fn prompt_for_int_array(&mut self, prompt: &str, delimiter: &str) -> Result<Vec<i32>> {
        let validator = IntArrayValidator::new(delimiter)?;
        let request = PromptRequest::new(prompt)?.allow_empty(true);
        self.prompt(&request, &validator)
    }
}
