//! The four arithmetic operations.
//!
//! All operations share one signature so they can be bound to a calculation
//! variant uniformly. Only [`div`](fn.div.html) can actually fail.

use crate::Error;

/// The signature shared by all operations.
pub type Operation = fn(f64, f64) -> Result<f64, Error>;

/// Add two numbers.
#[allow(clippy::unnecessary_wraps)]
pub fn add(a: f64, b: f64) -> Result<f64, Error> {
    Ok(a + b)
}

/// Subtract `b` from `a`.
#[allow(clippy::unnecessary_wraps)]
pub fn sub(a: f64, b: f64) -> Result<f64, Error> {
    Ok(a - b)
}

/// Multiply two numbers.
#[allow(clippy::unnecessary_wraps)]
pub fn mul(a: f64, b: f64) -> Result<f64, Error> {
    Ok(a * b)
}

/// Divide `a` by `b`.
///
/// Fails with [`Error::DivisionByZero`](../enum.Error.html) if `b` is zero (positive or negative).
#[allow(clippy::float_cmp)]
pub fn div(a: f64, b: f64) -> Result<f64, Error> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_operations() {
        assert_eq!(add(2.0, 3.0), Ok(5.0));
        assert_eq!(sub(2.0, 3.0), Ok(-1.0));
        assert_eq!(mul(4.0, 2.5), Ok(10.0));
    }

    #[test]
    fn division() {
        assert_eq!(div(20.0, 4.0), Ok(5.0));
        assert_eq!(div(1.0, 3.0), Ok(1.0 / 3.0));
        assert_eq!(div(-7.5, 2.5), Ok(-3.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(div(1.0, 0.0), Err(Error::DivisionByZero));
        assert_eq!(div(0.0, 0.0), Err(Error::DivisionByZero));
        assert_eq!(div(1.0, -0.0), Err(Error::DivisionByZero));
    }
}
