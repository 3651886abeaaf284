//! Terminal renderer: a single `Result: …` label line.

use colored::Colorize;

use crate::calculator::format_outcome;
use crate::constants::RESULT_PREFIX;
use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// Terminal output renderer.
///
/// Values are green and errors red when `color` is set; the text is the
/// same either way.
pub struct TerminalRenderer {
    pub precision: Option<usize>,
    pub color: bool,
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let text = format_outcome(&evaluation.outcome, self.precision);
        if !self.color {
            return format!("{RESULT_PREFIX}{text}");
        }
        let styled = match evaluation.outcome {
            Ok(_) => text.green().bold(),
            Err(_) => text.red().bold(),
        };
        format!("{}{}", RESULT_PREFIX.dimmed(), styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::evaluate;
    use crate::constants::{INPUT_ERROR, MATH_ERROR, OPERATION_ERROR};

    fn plain(left: &str, right: &str, selector: &str) -> String {
        TerminalRenderer { precision: None, color: false }.render(&evaluate(left, right, selector))
    }

    #[test]
    fn render_values() {
        assert_eq!(plain("3", "5", "+"), "Result: 8");
        assert_eq!(plain("30", "53", "-"), "Result: -23");
        assert_eq!(plain("5", "2", "/"), "Result: 2.5");
    }

    #[test]
    fn render_errors() {
        assert_eq!(plain("40", "0", "/"), format!("Result: {MATH_ERROR}"));
        assert_eq!(plain("abc", "123", "+"), format!("Result: {INPUT_ERROR}"));
        assert_eq!(plain("1", "2", "%"), format!("Result: {OPERATION_ERROR}"));
    }

    #[test]
    fn render_with_precision() {
        let renderer = TerminalRenderer { precision: Some(2), color: false };
        assert_eq!(renderer.render(&evaluate("1", "3", "/")), "Result: 0.33");
    }

    #[test]
    fn colored_output_keeps_text() {
        let renderer = TerminalRenderer { precision: None, color: true };
        let output = renderer.render(&evaluate("6", "7", "*"));
        // May be wrapped in ANSI color codes
        assert!(output.contains("Result: "));
        assert!(output.contains("42"));
    }
}
