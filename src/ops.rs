//! The four arithmetic operations.
//!
//! Plain `f64` functions with IEEE-754 semantics. Only [`divide`] has a
//! failure mode, and it reports it as a value rather than producing `inf`.

use thiserror::Error;

/// Failure raised by an arithmetic operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
}

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Divide `x` by `y`.
///
/// A zero divisor (`0.0` or `-0.0`) yields [`MathError::DivisionByZero`].
/// Every other input, including `NaN` and infinities, follows ordinary
/// floating-point division.
pub fn divide(x: f64, y: f64) -> Result<f64, MathError> {
    if y == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(x / y)
}
