//! Prompt defaults and configuration path utilities.
//!
//! This module holds the texts used when a caller does not supply its own
//! prompt, and resolves the menu definition file path with shell expansion.

/// Default path for the menu definition file
const DEFAULT_MENU_PATH: &str = "~/.console-ui/menu.yml";

/// Appended to a prompt when the request asks for a separator
pub const SEPARATOR: &str = ": ";

/// Label used for menu option `0` by the "with quit" menu helpers
pub const QUIT_OPTION: &str = "Quit";

pub const DEFAULT_TRUE_TOKEN: &str = "Yes";
pub const DEFAULT_FALSE_TOKEN: &str = "No";

pub const BYTE_PROMPT: &str = "Enter a byte";
pub const SHORT_PROMPT: &str = "Enter a short";
pub const INT_PROMPT: &str = "Enter an integer";
pub const LONG_PROMPT: &str = "Enter a long";
pub const FLOAT_PROMPT: &str = "Enter a floating point number";
pub const CHAR_PROMPT: &str = "Enter a character";
pub const LETTER_PROMPT: &str = "Enter a letter";
pub const STRING_PROMPT: &str = "Enter a string";
pub const BOOL_PROMPT: &str = "Enter \"yes\" or \"no\".";
pub const MENU_PROMPT: &str = "Select a menu option";

/// Inclusive bounds of the "letter" convenience prompt
pub const LETTER_MIN: char = 'A';
pub const LETTER_MAX: char = 'z';

/// Resolves the menu definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// menu path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use console_ui_core::config::get_menu_path;
///
/// let custom_path = get_menu_path(&Some("/path/to/menu.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/menu.yml");
/// ```
pub fn get_menu_path(menu_path_arg: &Option<String>) -> String {
    let menu_path = match menu_path_arg {
        Some(menu_path) => menu_path,
        None => DEFAULT_MENU_PATH,
    };

    shellexpand::tilde(menu_path).to_string()
}
