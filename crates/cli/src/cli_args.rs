//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. Each subcommand runs one kind of prompt; running without a
//! subcommand starts the interactive tour.

use clap::{Parser, Subcommand};
use console_ui_core::AddressForm;

/// Command-line arguments for the `cui` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use console_ui_cli::cli_args::{Args, PromptCommand};
///
/// let args = Args::parse_from(["cui", "int", "--min", "1", "--max", "6"]);
/// assert!(matches!(args.command, Some(PromptCommand::Int { .. })));
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a menu definition YAML, used by `menu` when no options are given.
    ///
    /// If not provided, defaults to `~/.console-ui/menu.yml`.
    #[arg(long, short = 'm', global = true)]
    pub menu_file: Option<String>,

    /// The prompt to run. Starts the interactive tour when omitted.
    #[command(subcommand)]
    pub command: Option<PromptCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PromptCommand {
    /// Read a line of free text.
    Text {
        #[arg(long, short = 'p')]
        prompt: Option<String>,

        /// Accept an empty line.
        #[arg(long, action)]
        allow_empty: bool,
    },

    /// Read an 8-bit integer.
    Byte {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i8>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i8>,
    },

    /// Read a 16-bit integer.
    Short {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i16>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i16>,
    },

    /// Read a 32-bit integer.
    Int {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,
    },

    /// Read a 64-bit integer.
    Long {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Read a 32-bit floating point number.
    Float {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f32>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f32>,
    },

    /// Read a 64-bit floating point number.
    Double {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
    },

    /// Read a single character.
    Char {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long)]
        min: Option<char>,
        #[arg(long)]
        max: Option<char>,
    },

    /// Read a single letter (`A` to `z`).
    Letter,

    /// Read one of two tokens.
    Bool {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, default_value = "Yes")]
        true_token: String,
        #[arg(long, default_value = "No")]
        false_token: String,
    },

    /// Read a delimited list of strings.
    Array {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, short = 'd', default_value = ",")]
        delimiter: String,
    },

    /// Read a delimited list of integers.
    IntArray {
        #[arg(long, short = 'p')]
        prompt: Option<String>,
        #[arg(long, short = 'd', default_value = ",")]
        delimiter: String,
    },

    /// Read an IPv4 address.
    Ip {
        #[arg(long, short = 'p')]
        prompt: Option<String>,

        /// One of `binary`, `decimal`, `dot_decimal` or `hex`.
        #[arg(long, short = 'f', default_value = "dot_decimal")]
        form: AddressForm,
    },

    /// Pick from a numbered menu.
    ///
    /// Options given on the command line are listed as-is; otherwise they
    /// are read from the menu definition file.
    Menu {
        /// Label for option `0`. Pass an empty string to disable it.
        #[arg(long, short = 'z', default_value = "Quit")]
        zero_option: String,

        options: Vec<String>,
    },

    /// Walk through every prompt type from a menu.
    Tour,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cui"]);
        assert!(args.menu_file.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_int_with_negative_bounds() {
        let args = Args::parse_from(["cui", "int", "--min", "-5", "--max", "5"]);
        assert_eq!(
            args.command,
            Some(PromptCommand::Int {
                prompt: None,
                min: Some(-5),
                max: Some(5)
            })
        );
    }

    #[test]
    fn test_byte_bound_out_of_width_is_rejected() {
        assert!(Args::try_parse_from(["cui", "byte", "--max", "300"]).is_err());
    }

    #[test]
    fn test_ip_form() {
        let args = Args::parse_from(["cui", "ip", "--form", "binary"]);
        assert_eq!(
            args.command,
            Some(PromptCommand::Ip {
                prompt: None,
                form: AddressForm::Binary
            })
        );

        let args = Args::parse_from(["cui", "ip"]);
        assert!(matches!(
            args.command,
            Some(PromptCommand::Ip {
                form: AddressForm::DotDecimal,
                ..
            })
        ));

        assert!(Args::try_parse_from(["cui", "ip", "--form", "octal"]).is_err());
    }

    #[test]
    fn test_bool_default_tokens() {
        let args = Args::parse_from(["cui", "bool"]);
        assert_eq!(
            args.command,
            Some(PromptCommand::Bool {
                prompt: None,
                true_token: "Yes".to_string(),
                false_token: "No".to_string()
            })
        );
    }

    #[test]
    fn test_menu_options_and_file() {
        let args = Args::parse_from([
            "cui", "menu", "--zero-option", "Back", "red", "green", "--menu-file", "/tmp/m.yml",
        ]);
        assert_eq!(args.menu_file, Some("/tmp/m.yml".to_string()));
        assert_eq!(
            args.command,
            Some(PromptCommand::Menu {
                zero_option: "Back".to_string(),
                options: vec!["red".to_string(), "green".to_string()]
            })
        );
    }

    #[test]
    fn test_int_array_delimiter() {
        let args = Args::parse_from(["cui", "int-array", "-d", ";"]);
        assert_eq!(
            args.command,
            Some(PromptCommand::IntArray {
                prompt: None,
                delimiter: ";".to_string()
            })
        );
    }
}
