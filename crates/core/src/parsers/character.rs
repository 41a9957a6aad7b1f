//! Single-character prompts.

use std::io::{BufRead, Write};

use crate::config::{LETTER_MAX, LETTER_MIN, LETTER_PROMPT};
use crate::console::Console;
use crate::error::{Error, Result};
use crate::prompt::{Outcome, PromptRequest, Rejection, Validator};

/// Accepts exactly one character whose code point lies in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharValidator {
    min: char,
    max: char,
}

impl CharValidator {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharRange`] unless `min < max`.
    pub fn new(min: char, max: char) -> Result<Self> {
        if min >= max {
            return Err(Error::InvalidCharRange { min, max });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn full_range() -> Self {
        Self {
            min: char::MIN,
            max: char::MAX,
        }
    }

    /// ASCII `'A'..='z'`, which also lets through the six punctuation
    /// characters between `Z` and `a`.
    #[must_use]
    pub fn letters() -> Self {
        Self {
            min: LETTER_MIN,
            max: LETTER_MAX,
        }
    }
}

impl Validator for CharValidator {
    type Output = char;

    fn validate(&self, input: &str) -> Outcome<char> {
        let mut chars = input.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            return Err(Rejection::NotSingleCharacter);
        };

        if character < self.min || character > self.max {
            return Err(Rejection::OutOfRange {
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }

        Ok(character)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts for one character in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharRange`] before prompting unless
    /// `min < max`, or a console failure.
    pub fn prompt_for_char_in(&mut self, prompt: &str, min: char, max: char) -> Result<char> {
        let validator = CharValidator::new(min, max)?;
        self.prompt(&PromptRequest::new(prompt)?, &validator)
    }

    /// Prompts for any single character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrompt`] for an empty prompt, or a console failure.
    pub fn prompt_for_char(&mut self, prompt: &str) -> Result<char> {
        self.prompt(&PromptRequest::new(prompt)?, &CharValidator::full_range())
    }

    /// Prompts for a letter with the default prompt.
    ///
    /// # Errors
    ///
    /// Only fails when the console does.
    pub fn prompt_for_letter(&mut self) -> Result<char> {
        self.prompt(&PromptRequest::new(LETTER_PROMPT)?, &CharValidator::letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_must_be_strictly_ordered() {
        assert!(matches!(
            CharValidator::new('a', 'a'),
            Err(Error::InvalidCharRange { min: 'a', max: 'a' })
        ));
        assert!(CharValidator::new('z', 'a').is_err());
        assert!(CharValidator::new('a', 'b').is_ok());
    }

    #[test]
    fn test_requires_exactly_one_character() {
        let validator = CharValidator::full_range();
        assert_eq!(validator.validate("x"), Ok('x'));
        assert_eq!(validator.validate("é"), Ok('é'));
        assert_eq!(validator.validate("xy"), Err(Rejection::NotSingleCharacter));
        assert_eq!(validator.validate(""), Err(Rejection::NotSingleCharacter));
        assert_eq!(
            validator.validate("ab").unwrap_err().to_string(),
            "Input must be a single character!"
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let validator = CharValidator::new('b', 'y').unwrap();
        assert_eq!(validator.validate("b"), Ok('b'));
        assert_eq!(validator.validate("y"), Ok('y'));
        assert_eq!(
            validator.validate("a").unwrap_err().to_string(),
            "Input must be from b to y!"
        );
        assert!(validator.validate("z").is_err());
    }

    #[test]
    fn test_letters() {
        let validator = CharValidator::letters();
        assert_eq!(validator.validate("A"), Ok('A'));
        assert_eq!(validator.validate("z"), Ok('z'));
        assert_eq!(validator.validate("_"), Ok('_'));
        assert_eq!(
            validator.validate("1").unwrap_err().to_string(),
            "Input must be from A to z!"
        );
    }
}
