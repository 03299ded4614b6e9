use err_derive::Error;
use rustyline::error::ReadlineError;
use std::io;

/// An error of the `calculator` binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An IO error.
    #[error(display = "{}", 0)]
    Io(#[error(from)] io::Error),

    /// The configuration file could not be parsed.
    #[error(display = "invalid configuration: {}", 0)]
    Config(#[error(from)] toml::de::Error),

    /// The line editor failed.
    #[error(display = "line editor: {}", 0)]
    Readline(#[error(from)] ReadlineError),

    /// The calculations could not be set up.
    #[error(display = "{}", 0)]
    Calculation(#[error(from)] calculation::Error),
}
