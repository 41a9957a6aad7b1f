//! The terminal handle shared by every prompt.
//!
//! A [`Console`] owns one line-oriented input stream and one output stream.
//! Production code builds it once with [`Console::stdio`]; tests inject an
//! in-memory reader and writer instead.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{trace, warn};

use crate::error::{Error, Result};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

/// A console bound to the process' standard input and output.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Blocks until one line is available and returns it without its line
    /// terminator (`\n` or `\r\n`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::StreamClosed`] once the input reaches end-of-input,
    /// and [`Error::Stdio`] if the underlying read fails.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;

        if read == 0 {
            warn!("Input stream closed while waiting for a line");
            return Err(Error::StreamClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        trace!("Read line: {line:?}");
        Ok(line)
    }

    /// Writes text without a trailing newline and flushes, so the cursor
    /// stays on the prompt line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stdio`] if the output cannot be written.
    pub fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes one full line of text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stdio`] if the output cannot be written.
    pub fn write_line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
