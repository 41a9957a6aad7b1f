//! Console UI CLI Library
//!
//! This crate provides the `cui` binary, a small front end that runs any of
//! the prompts from `console_ui_core` from the command line and echoes the
//! value read.
//!
//! # Key Features
//!
//! - **One Subcommand per Prompt**: Integers of every width, floats, characters, tokens, lists and addresses
//! - **Menus**: From positional options or a YAML menu definition file
//! - **Tour**: An interactive menu walking through every prompt kind
//! - **Coloured Output**: The value read is echoed with `crossterm` styling
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: Maps a subcommand onto a console prompt
//! - [`tour`]: The interactive tour
//! - [`output`]: Coloured echo of the answer
//!
//! # Examples
//!
//! ```bash
//! # Interactive tour
//! cui
//!
//! # A die roll between 1 and 6
//! cui int --min 1 --max 6 --prompt "Roll"
//!
//! # An address in binary form
//! cui ip --form binary
//!
//! # Pick from the entries in a menu definition file
//! cui menu --menu-file ~/menus/deploy.yml
//! ```

pub mod cli_args;
pub mod commands;
pub mod output;
pub mod tour;
