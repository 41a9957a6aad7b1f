//! Compact one-line renderings of lists, for echoing values back to the
//! operator.

use std::fmt::Display;

use itertools::Itertools;

use crate::error::{Error, Result};

pub const DEFAULT_CONTAINER: &str = "{}";
pub const DEFAULT_SUBCONTAINER: &str = "()";

fn container_chars(container: &str) -> Result<(char, char)> {
    let mut chars = container.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(open), Some(close), None) => Ok((open, close)),
        _ => Err(Error::InvalidContainer(container.to_string())),
    }
}

/// Renders `items` between the two characters of `container`, separated by
/// `", "`.
///
/// ```
/// use console_ui_core::printable::printable_array;
///
/// assert_eq!(printable_array(&[1, 2, 3], "{}").unwrap(), "{1, 2, 3}");
/// assert_eq!(printable_array::<u8>(&[], "[]").unwrap(), "[]");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidContainer`] unless `container` is exactly two
/// characters.
pub fn printable_array<T: Display>(items: &[T], container: &str) -> Result<String> {
    let (open, close) = container_chars(container)?;
    Ok(format!("{open}{}{close}", items.iter().join(", ")))
}

/// Renders each row with `subcontainer` and the rows with `container`,
/// e.g. `{(1, 2), (3)}`.
///
/// # Errors
///
/// Returns [`Error::InvalidContainer`] unless both containers are exactly
/// two characters.
pub fn printable_nested_array<T: Display>(
    rows: &[Vec<T>],
    container: &str,
    subcontainer: &str,
) -> Result<String> {
    let (open, close) = container_chars(container)?;
    container_chars(subcontainer)?;

    let rendered = rows
        .iter()
        .map(|row| printable_array(row, subcontainer))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{open}{}{close}", rendered.join(", ")))
}
