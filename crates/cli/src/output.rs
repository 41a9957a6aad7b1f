//! Coloured echo of the value a subcommand read.

use std::io::Write;

use console_ui_core::error::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};

use crate::commands::Answer;

/// Colour used to show `answer`. `None` means it isn't shown at all.
#[must_use]
pub fn answer_color(answer: &Answer) -> Option<Color> {
    match answer {
        Answer::Finished => None,
        Answer::Selection(None) => Some(Color::DarkGrey),
        Answer::Flag(false) => Some(Color::DarkYellow),
        _ => Some(Color::Green),
    }
}

/// Writes `answer` on its own line in its colour.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_answer<W: Write>(writer: &mut W, answer: &Answer) -> Result<()> {
    let Some(color) = answer_color(answer) else {
        return Ok(());
    };

    queue!(
        writer,
        SetForegroundColor(color),
        Print(answer),
        SetAttribute(Attribute::Reset),
        Print("\n")
    )?;
    writer.flush()?;
    Ok(())
}
