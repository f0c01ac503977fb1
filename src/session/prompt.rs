//! Line-oriented console prompts.

use std::io::{BufRead, Write};

use crate::error::SessionError;

/// Reads answers from `input` and writes prompts to `output`.
#[derive(Debug)]
pub(super) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(super) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(super) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub(super) fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub(super) fn say(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Read one line without its terminator.
    fn line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Show the `> ` marker and read free text.
    pub(super) fn text(&mut self) -> Result<String, SessionError> {
        write!(self.output, "> ")?;
        self.line()
    }

    /// Ask until a number in `0..=max` is entered.
    pub(super) fn choose(&mut self, max: usize) -> Result<usize, SessionError> {
        loop {
            let answer = self.text()?;
            match answer.trim().parse::<usize>() {
                Ok(n) if n <= max => return Ok(n),
                Ok(_) => {}
                Err(_) => self.say("Invalid number format.")?,
            }
        }
    }

    /// Ask until a number in `1..=max` is entered.
    pub(super) fn choose_from_one(&mut self, max: usize) -> Result<usize, SessionError> {
        loop {
            match self.choose(max)? {
                0 => {}
                n => return Ok(n),
            }
        }
    }

    /// Ask until exactly `Y` or `N` is entered.
    pub(super) fn confirm(&mut self) -> Result<bool, SessionError> {
        loop {
            match self.text()?.as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.say("Invalid Command")?,
            }
        }
    }
}
