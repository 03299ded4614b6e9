//! Parsing of a single input line.

use crate::Error;
use std::str::FromStr;

/// A command entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// An empty (or whitespace only) line.
    Blank,
    /// Show the help text.
    Help,
    /// Show the calculation history.
    History,
    /// Leave the calculator.
    Exit,
    /// Calculate `a <operation> b`.
    Calculate {
        /// The operation name as entered (not normalized).
        operation: String,
        /// The first operand.
        a: f64,
        /// The second operand.
        b: f64,
    },
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Ok(Self::Blank);
        }

        match line.to_lowercase().as_str() {
            "help" => return Ok(Self::Help),
            "history" => return Ok(Self::History),
            "exit" => return Ok(Self::Exit),
            _ => {}
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(operation), Some(a), Some(b), None) => Ok(Self::Calculate {
                operation: operation.to_string(),
                a: a.parse::<f64>().map_err(|_| Error::InvalidFormat)?,
                b: b.parse::<f64>().map_err(|_| Error::InvalidFormat)?,
            }),
            _ => Err(Error::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculate(operation: &str, a: f64, b: f64) -> Command {
        Command::Calculate {
            operation: operation.to_string(),
            a,
            b,
        }
    }

    #[test]
    fn blank() {
        assert_eq!("".parse::<Command>(), Ok(Command::Blank));
        assert_eq!("  \t ".parse::<Command>(), Ok(Command::Blank));
    }

    #[test]
    fn special_commands() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("  HISTORY ".parse::<Command>(), Ok(Command::History));
        assert_eq!("Exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn calculation() {
        assert_eq!("add 10 5".parse::<Command>(), Ok(calculate("add", 10.0, 5.0)));
        assert_eq!(
            "  subtract   15.5\t3.2 ".parse::<Command>(),
            Ok(calculate("subtract", 15.5, 3.2))
        );
        assert_eq!("DIVIDE -1 .5".parse::<Command>(), Ok(calculate("DIVIDE", -1.0, 0.5)));
        assert_eq!("foo 1 2".parse::<Command>(), Ok(calculate("foo", 1.0, 2.0)));
    }

    #[test]
    fn wrong_token_count() {
        assert_eq!("add".parse::<Command>(), Err(Error::InvalidFormat));
        assert_eq!("add 1".parse::<Command>(), Err(Error::InvalidFormat));
        assert_eq!("add 1 2 3".parse::<Command>(), Err(Error::InvalidFormat));
        assert_eq!("help me".parse::<Command>(), Err(Error::InvalidFormat));
    }

    #[test]
    fn operands_must_be_numbers() {
        assert_eq!("add one 2".parse::<Command>(), Err(Error::InvalidFormat));
        assert_eq!("add 1 two".parse::<Command>(), Err(Error::InvalidFormat));
        assert_eq!("add 1,5 2".parse::<Command>(), Err(Error::InvalidFormat));
    }
}
