//! Numbered menus.
//!
//! Options are listed as `1)\t<description>`, optionally followed by a
//! reserved `0)\t<label>` entry, and the selection is read with the bounded
//! integer prompt. Index `0` always means "no selection".

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

use serde::Deserialize;

use crate::config::{MENU_PROMPT, QUIT_OPTION};
use crate::console::Console;
use crate::error::{Error, Result};

/// Anything that can be listed in a menu.
pub trait MenuOption {
    /// A short description shown to the operator.
    fn description(&self) -> String;
}

impl MenuOption for String {
    fn description(&self) -> String {
        self.clone()
    }
}

impl MenuOption for &str {
    fn description(&self) -> String {
        (*self).to_string()
    }
}

/// A menu option loaded from a menu definition file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub description: Option<String>,
}

impl Display for MenuEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => formatter.write_str(description),
            None => formatter.write_str(&self.id),
        }
    }
}

impl MenuOption for MenuEntry {
    fn description(&self) -> String {
        self.to_string()
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn print_menu<I>(&mut self, descriptions: I, zero_option: &str) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (i, description) in descriptions.into_iter().enumerate() {
            self.write_line(format!("{})\t{description}", i + 1))?;
        }

        if !zero_option.is_empty() {
            self.write_line(format!("0)\t{zero_option}"))?;
        }

        Ok(())
    }

    fn select_menu_index(&mut self, option_count: usize, zero_option: &str) -> Result<usize> {
        let min = i64::from(zero_option.is_empty());
        let max = i64::try_from(option_count).unwrap_or(i64::MAX);

        let choice = self.prompt_for_number_in(MENU_PROMPT, min, max)?;

        // Bounded to [0, option_count] by the prompt above.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let index = choice as usize;
        Ok(index)
    }

    /// Lists `options` and returns the chosen one, or `None` if the operator
    /// picked the zero option. An empty `zero_option` means there is no
    /// zero option and `0` is not accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMenu`] if `options` is empty, or a console failure.
    pub fn prompt_for_menu_selection<'a, T: MenuOption>(
        &mut self,
        options: &'a [T],
        zero_option: &str,
    ) -> Result<Option<&'a T>> {
        if options.is_empty() {
            return Err(Error::EmptyMenu);
        }

        self.print_menu(options.iter().map(|option| option.description()), zero_option)?;
        let choice = self.select_menu_index(options.len(), zero_option)?;

        Ok(choice.checked_sub(1).map(|index| &options[index]))
    }

    /// Same as [`Console::prompt_for_menu_selection`], with `0)\tQuit` when
    /// `with_quit` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMenu`] if `options` is empty, or a console failure.
    pub fn prompt_for_menu_selection_with_quit<'a, T: MenuOption>(
        &mut self,
        options: &'a [T],
        with_quit: bool,
    ) -> Result<Option<&'a T>> {
        let zero_option = if with_quit { QUIT_OPTION } else { "" };
        self.prompt_for_menu_selection(options, zero_option)
    }

    /// Lists plain strings and returns the raw selected number: `1..=N` for
    /// an option, `0` for the zero option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMenu`] if `options` is empty, or a console failure.
    pub fn prompt_for_menu_index<S: AsRef<str>>(
        &mut self,
        options: &[S],
        zero_option: &str,
    ) -> Result<usize> {
        if options.is_empty() {
            return Err(Error::EmptyMenu);
        }

        self.print_menu(options.iter().map(|option| option.as_ref()), zero_option)?;
        self.select_menu_index(options.len(), zero_option)
    }
}
