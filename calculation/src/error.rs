use err_derive::Error;
use std::fmt;

/// An error of the `calculation` crate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input line is not of the form `<operation> <num1> <num2>`.
    #[error(display = "Invalid input. Please follow the format: <operation> <num1> <num2>")]
    InvalidFormat,

    /// No calculation is registered under the given name.
    #[error(
        display = "Unsupported calculation type: '{}'. Available types: {}",
        name,
        available
    )]
    UnsupportedOperation {
        /// The name as it was requested.
        name: String,
        /// All names known to the registry at the time of the request.
        available: OperationNames,
    },

    /// The divisor of a division was zero.
    #[error(display = "Cannot divide by zero.")]
    DivisionByZero,

    /// A calculation was registered twice under the same name.
    #[error(display = "Calculation type '{}' is already registered.", name)]
    DuplicateRegistration {
        /// The (normalized) name that was registered twice.
        name: String,
    },
}

/// The list of operation names shown when an unknown operation was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationNames(pub Vec<String>);

impl OperationNames {
    /// Check whether `name` is part of this list.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|known| known == name)
    }
}

impl fmt::Display for OperationNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
