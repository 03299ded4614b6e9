//! The read-print loop of the calculator.

use crate::{cli::prelude::ReplConfig, error::Error};
use calculation::{Reply, Session};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{BufRead, Write};

/// Printed when the user interrupts the calculator.
pub const INTERRUPTED: &str = "Keyboard interrupt detected. Exiting calculator. Goodbye!";

/// One result of reading from a [`LineSource`](trait.LineSource.html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line typed by the user (without line terminator).
    Input(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    /// The input was closed (Ctrl-D).
    Eof,
}

/// A line that was not valid UTF-8, handed to the session as an invalid command.
fn undecodable() -> Line {
    Line::Input(char::REPLACEMENT_CHARACTER.to_string())
}

/// Something to read user input from.
pub trait LineSource {
    /// Show `prompt` and read the next line.
    fn read_line(&mut self, prompt: &str) -> Result<Line, Error>;
}

/// Reads lines with `rustyline`, so previous lines can be recalled with the arrow keys.
///
/// The recalled lines are independent of the calculation history.
pub struct Editor {
    editor: DefaultEditor,
}

impl Editor {
    /// Create a line editor remembering up to `recall_size` lines.
    pub fn new(recall_size: usize) -> Result<Self, Error> {
        let config = rustyline::Config::builder()
            .max_history_size(recall_size)?
            .auto_add_history(true)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Line, Error> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Input(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            #[cfg(unix)]
            Err(ReadlineError::Utf8Error) => Ok(undecodable()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads plain lines from `reader` and writes the prompt to `prompt_out`.
pub struct Plain<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R, W> Plain<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a new plain line source.
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R, W> LineSource for Plain<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, prompt: &str) -> Result<Line, Error> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(Line::Eof);
        }
        match String::from_utf8(bytes) {
            Ok(line) => Ok(Line::Input(
                line.trim_end_matches(&['\r', '\n'][..]).to_string(),
            )),
            Err(err) => {
                log::debug!("Could not decode input line: {}", err);
                Ok(undecodable())
            }
        }
    }
}

/// How a REPL run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The user entered `exit`.
    Exit,
    /// The user pressed Ctrl-C.
    Interrupted,
    /// The input was closed.
    EndOfInput,
}

/// Run the loop until the user exits, interrupts or closes the input.
///
/// All user errors are handled by the `session`, only IO failures end the loop early.
pub fn run<S, W>(
    session: &mut Session,
    source: &mut S,
    out: &mut W,
    config: &ReplConfig,
) -> Result<Ending, Error>
where
    S: LineSource,
    W: Write,
{
    if config.banner {
        writeln!(out, "Welcome to the Professional Calculator REPL!")?;
        writeln!(out, "Type 'help' for instructions or 'exit' to quit.\n")?;
    }

    loop {
        let line = match source.read_line(&config.prompt)? {
            Line::Input(line) => line,
            Line::Interrupted => {
                writeln!(out, "\n{}", INTERRUPTED)?;
                return Ok(Ending::Interrupted);
            }
            Line::Eof => {
                writeln!(out, "\nEOF detected. Exiting calculator. Goodbye!")?;
                return Ok(Ending::EndOfInput);
            }
        };

        match session.handle_line(&line) {
            Reply::Silent => {}
            Reply::Message(message) => writeln!(out, "{}\n", message)?,
            Reply::Exit(message) => {
                writeln!(out, "{}", message)?;
                return Ok(Ending::Exit);
            }
        }
        out.flush()?;
    }
}
