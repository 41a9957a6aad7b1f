//! Console UI Core Library
//!
//! This crate provides validated, retry-until-valid prompts for interactive
//! terminal programs. A prompt writes its text, reads one line, and either
//! returns a typed value or prints why the line was refused and asks again.
//!
//! # Key Features
//!
//! - **Retry Engine**: One generic loop ([`Console::prompt`]) driven by pluggable [`Validator`]s
//! - **Typed Prompts**: Bounded integers/floats, characters, yes/no tokens, delimited lists and IPv4 addresses
//! - **Menus**: Numbered option lists with an optional reserved `0` entry
//! - **Injected I/O**: Any `BufRead` + `Write` pair can back a [`Console`], so prompts are testable
//! - **Helpers**: [`deck::Deck`], [`random`] utilities and [`printable`] list rendering
//!
//! # Examples
//!
//! ```no_run
//! use console_ui_core::Console;
//!
//! let mut console = Console::stdio();
//! let age: i32 = console.prompt_for_number_in("How old are you", 0, 150)?;
//! let sure = console.prompt_for_yes_no()?;
//! println!("{age} ({sure})");
//! # Ok::<(), console_ui_core::error::Error>(())
//! ```
//!
//! Prompts can be driven from memory, which is how they are tested:
//!
//! ```
//! use std::io::Cursor;
//! use console_ui_core::Console;
//!
//! let mut console = Console::new(Cursor::new("abc\n12\n"), Vec::new());
//! let value: i8 = console.prompt_for_number("Enter a byte")?;
//! assert_eq!(value, 12);
//!
//! let (_, output) = console.into_parts();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Enter a byte: Input must be a number!\nEnter a byte: "
//! );
//! # Ok::<(), console_ui_core::error::Error>(())
//! ```

pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod file_handling;
pub mod menu;
pub mod parsers;
pub mod printable;
pub mod prompt;
pub mod random;

pub use console::{Console, StdConsole};
pub use menu::{MenuEntry, MenuOption};
pub use parsers::AddressForm;
pub use prompt::{Outcome, PromptRequest, Rejection, Validator};
