//! Running a single prompt subcommand.
//!
//! Each [`PromptCommand`] maps onto one console prompt. The value read back
//! is wrapped in an [`Answer`] so the caller decides how to show it.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

use console_ui_core::config::{
    get_menu_path, CHAR_PROMPT, DEFAULT_FALSE_TOKEN, DEFAULT_TRUE_TOKEN, STRING_PROMPT,
};
use console_ui_core::error::Result;
use console_ui_core::file_handling::get_menu_entries;
use console_ui_core::parsers::Numeric;
use console_ui_core::printable::{printable_array, DEFAULT_CONTAINER};
use console_ui_core::{Console, PromptRequest};
use log::debug;

use crate::cli_args::PromptCommand;
use crate::tour::run_tour;

/// A value read from the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Integer(i64),
    Single(f32),
    Number(f64),
    Character(char),
    Flag(bool),
    List(Vec<String>),
    Integers(Vec<i32>),
    Address(String),
    /// The selected option, or `None` for the zero option.
    Selection(Option<String>),
    /// The tour prints as it goes and has nothing left to report.
    Finished,
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) | Answer::Address(text) => write!(f, "{text}"),
            Answer::Integer(value) => write!(f, "{value}"),
            Answer::Single(value) => write!(f, "{value}"),
            Answer::Number(value) => write!(f, "{value}"),
            Answer::Character(value) => write!(f, "{value}"),
            Answer::Flag(value) => write!(f, "{value}"),
            Answer::List(items) => write_list(f, items),
            Answer::Integers(items) => write_list(f, items),
            Answer::Selection(Some(option)) => write!(f, "{option}"),
            Answer::Selection(None) => write!(f, "nothing selected"),
            Answer::Finished => Ok(()),
        }
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> std::fmt::Result {
    let rendered = printable_array(items, DEFAULT_CONTAINER).map_err(|_| std::fmt::Error)?;
    f.write_str(&rendered)
}

fn bounded<T: Numeric, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: Option<&str>,
    min: Option<T>,
    max: Option<T>,
) -> Result<T> {
    console.prompt_for_number_in(
        prompt.unwrap_or(T::DEFAULT_PROMPT),
        min.unwrap_or(T::MIN),
        max.unwrap_or(T::MAX),
    )
}

fn select_from_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &[String],
    zero_option: &str,
    menu_file: &Option<String>,
) -> Result<Option<String>> {
    if !options.is_empty() {
        let selected = console.prompt_for_menu_selection(options, zero_option)?;
        return Ok(selected.cloned());
    }

    let menu_path = get_menu_path(menu_file);
    debug!("Menu path: `{menu_path}`");
    let entries = get_menu_entries(&menu_path)?;

    let selected = console.prompt_for_menu_selection(&entries, zero_option)?;
    Ok(selected.map(|entry| entry.id.clone()))
}

/// Runs `command` against `console` and returns what the operator entered.
///
/// `None` starts the tour.
///
/// # Errors
///
/// Returns an error if the command is misconfigured (e.g. `min > max`), if
/// the menu definition file cannot be loaded, or if the console fails.
pub fn run_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    command: Option<&PromptCommand>,
    menu_file: &Option<String>,
) -> Result<Answer> {
    let Some(command) = command else {
        run_tour(console)?;
        return Ok(Answer::Finished);
    };

    debug!("Running {command:?}");

    let answer = match command {
        PromptCommand::Text {
            prompt,
            allow_empty,
        } => {
            let request = PromptRequest::new(prompt.as_deref().unwrap_or(STRING_PROMPT))?
                .allow_empty(*allow_empty);
            Answer::Text(console.prompt_for_input(&request)?)
        }
        PromptCommand::Byte { prompt, min, max } => {
            Answer::Integer(bounded(console, prompt.as_deref(), *min, *max)?.into())
        }
        PromptCommand::Short { prompt, min, max } => {
            Answer::Integer(bounded(console, prompt.as_deref(), *min, *max)?.into())
        }
        PromptCommand::Int { prompt, min, max } => {
            Answer::Integer(bounded(console, prompt.as_deref(), *min, *max)?.into())
        }
        PromptCommand::Long { prompt, min, max } => {
            Answer::Integer(bounded(console, prompt.as_deref(), *min, *max)?)
        }
        PromptCommand::Float { prompt, min, max } => {
            Answer::Single(bounded(console, prompt.as_deref(), *min, *max)?)
        }
        PromptCommand::Double { prompt, min, max } => {
            Answer::Number(bounded(console, prompt.as_deref(), *min, *max)?)
        }
        PromptCommand::Char { prompt, min, max } => {
            let prompt = prompt.as_deref().unwrap_or(CHAR_PROMPT);
            let value = match (min, max) {
                (None, None) => console.prompt_for_char(prompt)?,
                _ => console.prompt_for_char_in(
                    prompt,
                    min.unwrap_or(char::MIN),
                    max.unwrap_or(char::MAX),
                )?,
            };
            Answer::Character(value)
        }
        PromptCommand::Letter => Answer::Character(console.prompt_for_letter()?),
        PromptCommand::Bool {
            prompt,
            true_token,
            false_token,
        } => match prompt {
            Some(prompt) => Answer::Flag(console.prompt_for_bool(prompt, true_token, false_token)?),
            None if true_token == DEFAULT_TRUE_TOKEN && false_token == DEFAULT_FALSE_TOKEN => {
                Answer::Flag(console.prompt_for_yes_no()?)
            }
            None => Answer::Flag(console.prompt_for_bool(
                &format!("Enter \"{true_token}\" or \"{false_token}\"."),
                true_token,
                false_token,
            )?),
        },
        PromptCommand::Array { prompt, delimiter } => {
            let prompt = prompt.clone().unwrap_or_else(|| list_prompt("values", delimiter));
            Answer::List(console.prompt_for_array(&prompt, delimiter)?)
        }
        PromptCommand::IntArray { prompt, delimiter } => {
            let prompt = prompt.clone().unwrap_or_else(|| list_prompt("integers", delimiter));
            Answer::Integers(console.prompt_for_int_array(&prompt, delimiter)?)
        }
        PromptCommand::Ip { prompt, form } => match prompt {
            Some(prompt) => Answer::Address(console.prompt_for_address(prompt, *form)?),
            None => Answer::Address(console.prompt_for_address_in_form(*form)?),
        },
        PromptCommand::Menu {
            zero_option,
            options,
        } => Answer::Selection(select_from_menu(console, options, zero_option, menu_file)?),
        PromptCommand::Tour => {
            run_tour(console)?;
            Answer::Finished
        }
    };

    Ok(answer)
}

fn list_prompt(kind: &str, delimiter: &str) -> String {
    format!("Enter {kind} separated by \"{delimiter}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Integer(-4).to_string(), "-4");
        assert_eq!(Answer::Number(2.5).to_string(), "2.5");
        assert_eq!(Answer::Flag(true).to_string(), "true");
        assert_eq!(
            Answer::List(vec!["a".to_string(), String::new()]).to_string(),
            "{a, }"
        );
        assert_eq!(Answer::Integers(vec![1, 2]).to_string(), "{1, 2}");
        assert_eq!(Answer::Selection(None).to_string(), "nothing selected");
        assert_eq!(Answer::Finished.to_string(), "");
    }

    #[test]
    fn test_byte_uses_width_bounds_by_default() {
        let mut console = scripted("128\n-128\n");
        let command = PromptCommand::Byte {
            prompt: None,
            min: None,
            max: None,
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Integer(-128));

        let (_, output) = console.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter a byte: Input must be from -128 to 127!\nEnter a byte: "
        );
    }

    #[test]
    fn test_float_without_bounds() {
        let mut console = scripted("1e3\n");
        let command = PromptCommand::Float {
            prompt: Some("Weight".to_string()),
            min: None,
            max: None,
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Single(1000.0));
    }

    #[test]
    fn test_float_echoes_in_its_own_precision() {
        let mut console = scripted("1.1\n");
        let command = PromptCommand::Float {
            prompt: None,
            min: None,
            max: None,
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer.to_string(), "1.1");
    }

    #[test]
    fn test_bool_default_tokens_use_yes_no_prompt() {
        let mut console = scripted("no\n");
        let command = PromptCommand::Bool {
            prompt: None,
            true_token: DEFAULT_TRUE_TOKEN.to_string(),
            false_token: DEFAULT_FALSE_TOKEN.to_string(),
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Flag(false));

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Enter \"yes\" or \"no\".: ");
    }

    #[test]
    fn test_char_with_one_bound() {
        let mut console = scripted("a\n5\n");
        let command = PromptCommand::Char {
            prompt: Some("Digit".to_string()),
            min: None,
            max: Some('9'),
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Character('5'));
    }

    #[test]
    fn test_bool_default_prompt_names_tokens() {
        let mut console = scripted("hit\n");
        let command = PromptCommand::Bool {
            prompt: None,
            true_token: "Hit".to_string(),
            false_token: "Stand".to_string(),
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Flag(true));

        let (_, output) = console.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter \"Hit\" or \"Stand\".: "
        );
    }

    #[test]
    fn test_menu_from_arguments() {
        let mut console = scripted("2\n");
        let command = PromptCommand::Menu {
            zero_option: "Back".to_string(),
            options: vec!["red".to_string(), "green".to_string()],
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Selection(Some("green".to_string())));
    }

    #[test]
    fn test_text_allowing_empty() {
        let mut console = scripted("\n");
        let command = PromptCommand::Text {
            prompt: Some("Notes".to_string()),
            allow_empty: true,
        };

        let answer = run_command(&mut console, Some(&command), &None).unwrap();
        assert_eq!(answer, Answer::Text(String::new()));
    }
}
