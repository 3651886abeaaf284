//! Input validation, dispatch, and result formatting.
//!
//! [`calculate`] is the single entry point every front end goes through:
//! raw operand text and a selector in, a number or a [`CalcError`] out.
//! It never panics.

use crate::constants::MAX_PRECISION;
use crate::models::{CalcError, Evaluation, Operation, Outcome};

/// Parse operand text as a real number.
///
/// Surrounding whitespace is ignored. Any standard float spelling is
/// accepted, including exponents, `inf`, and `NaN`.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    raw.trim().parse::<f64>().map_err(|_| CalcError::InvalidInput)
}

/// Validate both operands, resolve the selector, and run the operation.
///
/// Operand errors take precedence over selector errors, so `"abc"` with an
/// unknown selector reports [`CalcError::InvalidInput`].
pub fn calculate(left: &str, right: &str, selector: &str) -> Outcome {
    let x = parse_operand(left)?;
    let y = parse_operand(right)?;
    let op: Operation = selector
        .parse()
        .map_err(|_| CalcError::InvalidOperation)?;
    let value = op.apply(x, y)?;
    tracing::debug!(%op, x, y, value, "calculated");
    Ok(value)
}

/// Run [`calculate`] and keep the inputs alongside the outcome.
pub fn evaluate(left: &str, right: &str, selector: &str) -> Evaluation {
    let outcome = calculate(left, right, selector);
    if let Err(err) = outcome {
        tracing::debug!(left, right, selector, kind = err.kind(), "calculation rejected");
    }
    Evaluation {
        left: left.to_string(),
        right: right.to_string(),
        selector: selector.to_string(),
        operation: selector.parse().ok(),
        outcome,
    }
}

/// Render a numeric result as display text.
///
/// Without a precision the shortest representation that round-trips is
/// used (`5`, `2.5`, `-23`). With `Some(n)` exactly `n` fractional digits
/// are printed, `n` capped at [`MAX_PRECISION`]. Finite non-zero values
/// with magnitude `>= 1e16` or `< 1e-4` switch to exponent form (`1e301`).
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    let exponent = value.is_finite()
        && value != 0.0
        && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&value.abs());
    match (precision.map(|p| p.min(MAX_PRECISION)), exponent) {
        (Some(p), true) => format!("{value:.p$e}"),
        (Some(p), false) => format!("{value:.p$}"),
        (None, true) => format!("{value:e}"),
        (None, false) => format!("{value}"),
    }
}

const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_FROM: f64 = 1e16;

/// Render an outcome as display text: the number, or the fixed error message.
pub fn format_outcome(outcome: &Outcome, precision: Option<usize>) -> String {
    match outcome {
        Ok(value) => format_value(*value, precision),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INPUT_ERROR, MATH_ERROR, OPERATION_ERROR};

    fn run(left: &str, right: &str, selector: &str) -> String {
        format_outcome(&calculate(left, right, selector), None)
    }

    #[test]
    fn end_to_end_examples() {
        assert_eq!(run("2", "3", "add"), "5");
        assert_eq!(run("10", "4", "subtract"), "6");
        assert_eq!(run("6", "7", "multiply"), "42");
        assert_eq!(run("8", "2", "divide"), "4");
        assert_eq!(run("5", "0", "divide"), MATH_ERROR);
        assert_eq!(run("x", "3", "add"), INPUT_ERROR);
        assert_eq!(run("2", "3", "power"), OPERATION_ERROR);
    }

    #[test]
    fn symbol_selectors() {
        assert_eq!(run("3", "5", "+"), "8");
        assert_eq!(run("30", "53", "-"), "-23");
        assert_eq!(run("50", "13", "-"), "37");
        assert_eq!(run("50", "13", "*"), "650");
        assert_eq!(run("40", "2", "/"), "20");
        assert_eq!(run("40", "0", "/"), MATH_ERROR);
    }

    #[test]
    fn invalid_operand_wins_over_invalid_selector() {
        for bad in ["abc", "", "1,2", "  ", "3..1"] {
            assert_eq!(calculate(bad, "1", "add"), Err(CalcError::InvalidInput));
            assert_eq!(calculate("1", bad, "modulo"), Err(CalcError::InvalidInput));
        }
    }

    #[test]
    fn unknown_selector_with_valid_operands() {
        assert_eq!(calculate("2", "3", "modulo"), Err(CalcError::InvalidOperation));
        assert_eq!(calculate("2", "3", "%"), Err(CalcError::InvalidOperation));
    }

    #[test]
    fn operands_are_trimmed() {
        assert_eq!(calculate(" 2 ", "\t3\n", "add"), Ok(5.0));
    }

    #[test]
    fn float_spellings_parse() {
        assert_eq!(parse_operand("1e3"), Ok(1000.0));
        assert_eq!(parse_operand("-2.5"), Ok(-2.5));
        assert_eq!(parse_operand("inf"), Ok(f64::INFINITY));
        assert!(parse_operand("NaN").unwrap().is_nan());
    }

    #[test]
    fn negative_zero_divisor_is_math_error() {
        assert_eq!(calculate("1", "-0", "divide"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn evaluate_records_inputs() {
        let eval = evaluate("2", "3", "+");
        assert_eq!(eval.left, "2");
        assert_eq!(eval.right, "3");
        assert_eq!(eval.selector, "+");
        assert_eq!(eval.operation, Some(Operation::Add));
        assert_eq!(eval.outcome, Ok(5.0));
        assert!(eval.is_ok());
    }

    #[test]
    fn evaluate_resolves_operation_even_when_operand_is_bad() {
        let eval = evaluate("abc", "3", "divide");
        assert_eq!(eval.operation, Some(Operation::Divide));
        assert_eq!(eval.outcome, Err(CalcError::InvalidInput));
    }

    #[test]
    fn format_with_precision() {
        assert_eq!(format_value(2.0 / 3.0, Some(3)), "0.667");
        assert_eq!(format_value(4.0, Some(2)), "4.00");
        assert_eq!(format_value(4.0, Some(0)), "4");
        assert_eq!(format_value(2.5, None), "2.5");
    }

    #[test]
    fn format_caps_oversized_precision() {
        let out = format_value(2.0, Some(70_000));
        assert_eq!(out, format!("2.{}", "0".repeat(MAX_PRECISION)));
        assert_eq!(format_value(2.0, Some(usize::MAX)), out);
    }

    #[test]
    fn format_extreme_magnitudes_in_exponent_form() {
        assert_eq!(format_value(1e301, None), "1e301");
        assert_eq!(format_value(-1e-20, None), "-1e-20");
        assert_eq!(format_value(1.5e16, Some(2)), "1.50e16");
        assert_eq!(run("2e300", "0.5", "*"), "1e300");
    }

    #[test]
    fn format_keeps_positional_form_near_the_thresholds() {
        assert_eq!(format_value(1e15, None), "1000000000000000");
        assert_eq!(format_value(0.0001, None), "0.0001");
        assert_eq!(format_value(0.0, None), "0");
        assert_eq!(format_value(f64::INFINITY, None), "inf");
    }

    #[test]
    fn format_error_ignores_precision() {
        let out = format_outcome(&Err(CalcError::DivisionByZero), Some(4));
        assert_eq!(out, MATH_ERROR);
    }
}
