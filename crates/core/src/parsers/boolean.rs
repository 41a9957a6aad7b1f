//! Two-token boolean prompts (`Yes`/`No`, `y`/`n`, ...).

use std::io::{BufRead, Write};

use crate::config::{BOOL_PROMPT, DEFAULT_FALSE_TOKEN, DEFAULT_TRUE_TOKEN};
use crate::console::Console;
use crate::error::{Error, Result};
use crate::prompt::{Outcome, PromptRequest, Rejection, Validator};

/// Maps a case-insensitive match of `true_token` to `true` and of
/// `false_token` to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolValidator {
    true_token: String,
    false_token: String,
}

impl BoolValidator {
    /// # Errors
    ///
    /// Returns [`Error::IdenticalTokens`] if both tokens are the same string.
    pub fn new(true_token: impl Into<String>, false_token: impl Into<String>) -> Result<Self> {
        let (true_token, false_token) = (true_token.into(), false_token.into());

        if true_token == false_token {
            return Err(Error::IdenticalTokens(true_token));
        }

        Ok(Self {
            true_token,
            false_token,
        })
    }
}

impl Default for BoolValidator {
    fn default() -> Self {
        Self {
            true_token: DEFAULT_TRUE_TOKEN.to_string(),
            false_token: DEFAULT_FALSE_TOKEN.to_string(),
        }
    }
}

impl Validator for BoolValidator {
    type Output = bool;

    fn validate(&self, input: &str) -> Outcome<bool> {
        let input = input.to_lowercase();

        // The true token wins if the tokens only differ by case.
        if input == self.true_token.to_lowercase() {
            Ok(true)
        } else if input == self.false_token.to_lowercase() {
            Ok(false)
        } else {
            Err(Rejection::NotBoolean {
                true_token: self.true_token.clone(),
                false_token: self.false_token.clone(),
            })
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts until the operator types one of the two tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdenticalTokens`] before prompting if the tokens are
    /// equal, or a console failure.
    pub fn prompt_for_bool(
        &mut self,
        prompt: &str,
        true_token: &str,
        false_token: &str,
    ) -> Result<bool> {
        let validator = BoolValidator::new(true_token, false_token)?;
        let request = PromptRequest::new(prompt)?.allow_empty(true);
        self.prompt(&request, &validator)
    }

    /// Prompts for `Yes` or `No` with the default prompt.
    ///
    /// # Errors
    ///
    /// Only fails when the console does.
    pub fn prompt_for_yes_no(&mut self) -> Result<bool> {
        let request = PromptRequest::new(BOOL_PROMPT)?.allow_empty(true);
        self.prompt(&request, &BoolValidator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_must_differ() {
        assert!(matches!(
            BoolValidator::new("Yes", "Yes"),
            Err(Error::IdenticalTokens(_))
        ));
        assert!(BoolValidator::new("Yes", "yes").is_ok());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let validator = BoolValidator::default();
        assert_eq!(validator.validate("yes"), Ok(true));
        assert_eq!(validator.validate("YES"), Ok(true));
        assert_eq!(validator.validate("Yes"), Ok(true));
        assert_eq!(validator.validate("no"), Ok(false));
        assert_eq!(validator.validate("nO"), Ok(false));
    }

    #[test]
    fn test_other_input_is_rejected() {
        let validator = BoolValidator::default();
        assert_eq!(
            validator.validate("maybe").unwrap_err().to_string(),
            "Input must be Yes or No!"
        );
        assert!(validator.validate("").is_err());
        assert!(validator.validate(" yes").is_err());
    }

    #[test]
    fn test_custom_tokens() {
        let validator = BoolValidator::new("hit", "stand").unwrap();
        assert_eq!(validator.validate("HIT"), Ok(true));
        assert_eq!(validator.validate("Stand"), Ok(false));
        assert_eq!(
            validator.validate("y").unwrap_err().to_string(),
            "Input must be hit or stand!"
        );
    }

    #[test]
    fn test_tokens_differing_by_case_prefer_true() {
        let validator = BoolValidator::new("Yes", "yes").unwrap();
        assert_eq!(validator.validate("yes"), Ok(true));
    }
}
