//! Outcome types for a single calculation.

use serde::Serialize;
use thiserror::Error;

use super::operation::Operation;
use crate::constants::{INPUT_ERROR, MATH_ERROR, OPERATION_ERROR};
use crate::ops::MathError;

/// A user-visible calculation failure.
///
/// `Display` yields the fixed message shown in place of a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    /// An operand did not parse as a real number.
    #[error("{}", INPUT_ERROR)]
    InvalidInput,
    /// The selector named no known operation.
    #[error("{}", OPERATION_ERROR)]
    InvalidOperation,
    /// Division with a zero divisor.
    #[error("{}", MATH_ERROR)]
    DivisionByZero,
}

impl CalcError {
    /// Stable machine-readable identifier.
    pub fn kind(self) -> &'static str {
        match self {
            CalcError::InvalidInput => "invalid_input",
            CalcError::InvalidOperation => "invalid_operation",
            CalcError::DivisionByZero => "division_by_zero",
        }
    }
}

impl From<MathError> for CalcError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => CalcError::DivisionByZero,
        }
    }
}

/// Result of the dispatch routine.
pub type Outcome = Result<f64, CalcError>;

/// One recorded invocation: the raw inputs and what they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub left: String,
    pub right: String,
    pub selector: String,
    /// The operation the selector resolved to, if it resolved at all.
    pub operation: Option<Operation>,
    pub outcome: Outcome,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
