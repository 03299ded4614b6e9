//! Calculations bind two operands to an operation.

use crate::{operation, Error};
use std::fmt::Debug;

/// An operand pair bound to an operation.
///
/// The operands are fixed on construction. A calculation is not executed until
/// [`execute`](#tymethod.execute) (or [`render`](#method.render)) is called.
pub trait Calculation: Debug {
    /// The human readable kind, e.g. `"Add"`.
    fn kind(&self) -> &'static str;

    /// The name this calculation is registered under, e.g. `"add"`.
    fn name(&self) -> &'static str;

    /// The operands `(a, b)`.
    fn operands(&self) -> (f64, f64);

    /// Apply the operation to the operands.
    fn execute(&self) -> Result<f64, Error>;

    /// Format the calculation as `"<Kind>: <a> <name> <b> = <result>"`.
    ///
    /// The result is computed again on every call.
    fn render(&self) -> Result<String, Error> {
        let (a, b) = self.operands();
        let result = self.execute()?;
        Ok(format!(
            "{}: {} {} {} = {}",
            self.kind(),
            a,
            self.name(),
            b,
            result
        ))
    }
}

define_calculations! {
    /// Register the four built-in calculations in `registry`.
    pub fn register_builtins;

    /// Adds two numbers.
    Add => "add", operation::add;
    /// Subtracts the second number from the first.
    Subtract => "subtract", operation::sub;
    /// Multiplies two numbers.
    Multiply => "multiply", operation::mul;
    /// Divides the first number by the second.
    Divide => "divide", operation::div;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_applies_operation() {
        assert_eq!(Add::new(2.0, 3.0).execute(), Ok(5.0));
        assert_eq!(Subtract::new(2.0, 3.0).execute(), Ok(-1.0));
        assert_eq!(Multiply::new(4.0, 2.0).execute(), Ok(8.0));
        assert_eq!(Divide::new(20.0, 4.0).execute(), Ok(5.0));
    }

    #[test]
    fn divide_propagates_division_by_zero() {
        let divide = Divide::new(1.0, 0.0);
        assert_eq!(divide.execute(), Err(Error::DivisionByZero));
        assert_eq!(divide.render(), Err(Error::DivisionByZero));
    }

    #[test]
    fn render() {
        assert_eq!(Add::new(2.0, 3.0).render().unwrap(), "Add: 2 add 3 = 5");
        assert_eq!(
            Subtract::new(15.5, 3.25).render().unwrap(),
            "Subtract: 15.5 subtract 3.25 = 12.25"
        );
        assert_eq!(
            Multiply::new(4.0, 2.0).render().unwrap(),
            "Multiply: 4 multiply 2 = 8"
        );
        assert_eq!(
            Divide::new(1.0, 4.0).render().unwrap(),
            "Divide: 1 divide 4 = 0.25"
        );
    }

    #[test]
    fn operands_are_kept() {
        let calculation = Multiply::new(-1.5, 7.0);
        assert_eq!(calculation.operands(), (-1.5, 7.0));
        assert_eq!(calculation.kind(), "Multiply");
        assert_eq!(calculation.name(), "multiply");
    }

    #[test]
    fn render_is_repeatable() {
        let calculation = Divide::new(10.0, 4.0);
        assert_eq!(calculation.render(), calculation.render());
    }
}
