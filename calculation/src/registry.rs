//! A registry mapping operation names to calculation constructors.

use crate::{calculation, Calculation, Error, OperationNames};
use std::collections::HashMap;

/// Builds a calculation from its two operands.
pub type Constructor = fn(f64, f64) -> Box<dyn Calculation>;

/// Maps lowercase operation names to [`Constructor`](type.Constructor.html)s.
///
/// ```
/// use calculation::{Error, Registry};
///
/// let registry = Registry::with_builtins().unwrap();
///
/// let calculation = registry.create("ADD", 2.0, 3.0).unwrap();
/// assert_eq!(calculation.execute(), Ok(5.0));
///
/// match registry.create("modulo", 2.0, 3.0) {
///     Err(Error::UnsupportedOperation { available, .. }) => {
///         assert_eq!(available.to_string(), "add, subtract, multiply, divide");
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
    /// Names in registration order.
    names: Vec<String>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry containing the built-in calculations
    /// `add`, `subtract`, `multiply` and `divide`.
    pub fn with_builtins() -> Result<Self, Error> {
        let mut registry = Self::new();
        calculation::register_builtins(&mut registry)?;
        Ok(registry)
    }

    /// Register `constructor` under `name`.
    ///
    /// The name is stored lowercase. Registering the same name twice fails.
    pub fn register(&mut self, name: &str, constructor: Constructor) -> Result<(), Error> {
        let name = name.to_lowercase();
        if self.constructors.contains_key(&name) {
            return Err(Error::DuplicateRegistration { name });
        }
        log::trace!("Registering calculation {:?}.", name);
        self.constructors.insert(name.clone(), constructor);
        self.names.push(name);
        Ok(())
    }

    /// Create the calculation registered under `name` (case-insensitive).
    ///
    /// The calculation is not executed.
    pub fn create(&self, name: &str, a: f64, b: f64) -> Result<Box<dyn Calculation>, Error> {
        let constructor = match self.constructors.get(&name.to_lowercase()) {
            Some(constructor) => constructor,
            None => {
                return Err(Error::UnsupportedOperation {
                    name: name.to_string(),
                    available: OperationNames(self.names.clone()),
                })
            }
        };
        let calculation = constructor(a, b);
        log::debug!("Created calculation {:?}.", calculation);
        Ok(calculation)
    }

    /// Check whether a calculation is registered under `name` (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&name.to_lowercase())
    }

    /// All registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The number of registered calculations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether no calculation is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
