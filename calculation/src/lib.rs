#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! Calculations over two operands, a registry to create them by name and the
//! session state of an interactive calculator.
//!
//! ```
//! use calculation::{Error, Registry};
//!
//! // register the built-in calculations
//! let registry = Registry::with_builtins().unwrap();
//!
//! // create a calculation by name
//! let calculation = registry.create("divide", 20.0, 4.0).unwrap();
//! assert_eq!(calculation.execute(), Ok(5.0));
//! assert_eq!(calculation.render().unwrap(), "Divide: 20 divide 4 = 5");
//!
//! // dividing by zero is an error
//! let calculation = registry.create("divide", 1.0, 0.0).unwrap();
//! assert_eq!(calculation.execute(), Err(Error::DivisionByZero));
//! ```

#[macro_use]
mod macros;

pub mod calculation;
pub mod command;
mod error;
pub mod history;
pub mod operation;
pub mod registry;
pub mod session;

pub use calculation::Calculation;
pub use command::Command;
pub use error::{Error, OperationNames};
pub use history::History;
pub use registry::{Constructor, Registry};
pub use session::{Reply, Session};
