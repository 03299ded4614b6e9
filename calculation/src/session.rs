//! The state of one calculator session.
//!
//! ```
//! use calculation::{Registry, Reply, Session};
//!
//! let mut session = Session::new(Registry::with_builtins().unwrap());
//!
//! assert_eq!(
//!     session.handle_line("add 10 5"),
//!     Reply::Message("Result: Add: 10 add 5 = 15".to_string())
//! );
//! assert_eq!(session.history().len(), 1);
//! assert!(session.handle_line("exit").is_exit());
//! ```

use crate::{Command, Error, History, Registry};

/// The help text shown for the `help` command.
pub const HELP: &str = "\
Calculator REPL Help
--------------------
Usage:
    <operation> <number1> <number2>
    - Perform a calculation with the specified operation and two numbers.
    - Supported operations:
        add       : Adds two numbers.
        subtract  : Subtracts the second number from the first.
        multiply  : Multiplies two numbers.
        divide    : Divides the first number by the second.

Special Commands:
    help      : Display this help message.
    history   : Show the history of calculations.
    exit      : Exit the calculator.

Examples:
    add 10 5
    subtract 15.5 3.2
    multiply 7 8
    divide 20 4";

const GOODBYE: &str = "Exiting calculator. Goodbye!";

/// What to tell the user after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print, just prompt again.
    Silent,
    /// Print the message and prompt again.
    Message(String),
    /// Print the message and end the session.
    Exit(String),
}

impl Reply {
    /// Check whether the session should end.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// A calculator session: a registry to build calculations and the history of
/// successful ones.
pub struct Session {
    registry: Registry,
    history: History,
}

impl Session {
    /// Start a new session with an empty history.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            history: History::new(),
        }
    }

    /// The registry used by this session.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The successful calculations of this session.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Handle one line of user input.
    ///
    /// User errors never end the session, they are turned into a message.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command),
            Err(err) => {
                log::debug!("Could not parse {:?}: {}", line, err);
                Reply::Message(format!("{}\nType 'help' for more information.", err))
            }
        }
    }

    /// Handle an already parsed command.
    pub fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Blank => Reply::Silent,
            Command::Help => Reply::Message(HELP.to_string()),
            Command::History => Reply::Message(self.show_history()),
            Command::Exit => Reply::Exit(GOODBYE.to_string()),
            Command::Calculate { operation, a, b } => self.calculate(&operation, a, b),
        }
    }

    fn show_history(&self) -> String {
        if self.history.is_empty() {
            return "No calculations performed yet.".to_string();
        }
        let mut lines = vec!["Calculation History:".to_string()];
        lines.extend(self.history.render_lines());
        lines.join("\n")
    }

    fn calculate(&mut self, operation: &str, a: f64, b: f64) -> Reply {
        let calculation = match self.registry.create(operation, a, b) {
            Ok(calculation) => calculation,
            Err(err) => {
                log::debug!("Rejected operation {:?}: {}", operation, err);
                return Reply::Message(format!(
                    "{}\nType 'help' to see the list of supported operations.",
                    err
                ));
            }
        };

        let rendered = match calculation.execute().and_then(|_| calculation.render()) {
            Ok(rendered) => rendered,
            Err(Error::DivisionByZero) => {
                log::debug!("Division by zero in {:?}.", calculation);
                return Reply::Message(
                    "Cannot divide by zero.\nPlease enter a non-zero divisor.".to_string(),
                );
            }
            Err(err) => {
                log::warn!("Calculation {:?} failed: {}", calculation, err);
                return Reply::Message(format!(
                    "An error occurred during calculation: {}\nPlease try again.",
                    err
                ));
            }
        };

        self.history.push(calculation);
        log::trace!("History now has {} entries.", self.history.len());
        Reply::Message(format!("Result: {}", rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Registry::with_builtins().unwrap())
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(message) => message,
            other => panic!("expected a message, got {:?}", other),
        }
    }

    #[test]
    fn blank_line_is_silent() {
        let mut session = session();
        assert_eq!(session.handle_line(""), Reply::Silent);
        assert_eq!(session.handle_line("   "), Reply::Silent);
    }

    #[test]
    fn help() {
        let mut session = session();
        let help = message(session.handle_line("help"));
        assert!(help.contains("Calculator REPL Help"));
        for name in session.registry().names() {
            assert!(help.contains(name), "help does not mention {}", name);
        }
    }

    #[test]
    fn exit() {
        let mut session = session();
        assert_eq!(
            session.handle_line("EXIT"),
            Reply::Exit("Exiting calculator. Goodbye!".to_string())
        );
    }

    #[test]
    fn empty_history() {
        let mut session = session();
        assert_eq!(
            message(session.handle_line("history")),
            "No calculations performed yet."
        );
    }

    #[test]
    fn successful_calculation_is_recorded() {
        let mut session = session();
        let reply = message(session.handle_line("add 10 5"));
        assert_eq!(reply, "Result: Add: 10 add 5 = 15");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn invalid_format() {
        let mut session = session();
        let reply = message(session.handle_line("add 1"));
        assert!(reply.starts_with("Invalid input."));
        assert!(reply.ends_with("Type 'help' for more information."));
        assert!(session.history().is_empty());
    }

    #[test]
    fn unsupported_operation() {
        let mut session = session();
        let reply = message(session.handle_line("foo 1 2"));
        assert!(reply.contains("add, subtract, multiply, divide"));
        assert!(reply.ends_with("Type 'help' to see the list of supported operations."));
        assert!(session.history().is_empty());
    }

    #[test]
    fn division_by_zero_is_not_recorded() {
        let mut session = session();
        let reply = message(session.handle_line("divide 1 0"));
        assert_eq!(reply, "Cannot divide by zero.\nPlease enter a non-zero divisor.");
        assert!(session.history().is_empty());
    }

    #[test]
    fn history_lists_successes_in_order() {
        let mut session = session();
        session.handle_line("add 2 3");
        session.handle_line("divide 5 0");
        session.handle_line("multiply 4 2");
        assert_eq!(
            message(session.handle_line("history")),
            "Calculation History:\n1. Add: 2 add 3 = 5\n2. Multiply: 4 multiply 2 = 8"
        );
    }
}
