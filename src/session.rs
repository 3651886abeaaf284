//! Interactive prompt loop.
//!
//! Asks for an operation, then two numbers, prints the rendered result,
//! and repeats until the user types `quit` or input ends. Reader and
//! writer are injected so the loop can be driven from tests.

use std::io::{self, BufRead, Write};

use crate::calculator::{evaluate, parse_operand};
use crate::models::Operation;
use crate::output::OutputRenderer;

/// Word that ends the session (case-insensitive).
pub const QUIT_COMMAND: &str = "quit";

pub const INVALID_OPERATION_RETRY: &str = "Invalid operation. Try again.";
pub const INVALID_NUMBER_RETRY: &str = "Invalid number. Try again.";

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Calculations that were carried out.
    pub evaluations: usize,
    /// Calculations that produced an error outcome (e.g. division by zero).
    pub errors: usize,
    /// Entries rejected at a prompt before any calculation ran.
    pub rejected: usize,
}

/// A prompt loop bound to an input, an output, and a renderer.
pub struct Session<'a, R, W> {
    reader: R,
    writer: W,
    renderer: &'a dyn OutputRenderer,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(reader: R, writer: W, renderer: &'a dyn OutputRenderer) -> Self {
        Self {
            reader,
            writer,
            renderer,
            summary: SessionSummary::default(),
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        self.banner()?;

        loop {
            let symbols = symbol_list();
            let Some(selector) = self.prompt(&format!("Enter operation ({symbols}): "))? else {
                break;
            };
            if selector.eq_ignore_ascii_case(QUIT_COMMAND) {
                break;
            }
            if selector.parse::<Operation>().is_err() {
                self.summary.rejected += 1;
                writeln!(self.writer, "{INVALID_OPERATION_RETRY}")?;
                continue;
            }

            let Some(left) = self.prompt("Enter first number: ")? else {
                break;
            };
            if parse_operand(&left).is_err() {
                self.summary.rejected += 1;
                writeln!(self.writer, "{INVALID_NUMBER_RETRY}")?;
                continue;
            }
            let Some(right) = self.prompt("Enter second number: ")? else {
                break;
            };
            if parse_operand(&right).is_err() {
                self.summary.rejected += 1;
                writeln!(self.writer, "{INVALID_NUMBER_RETRY}")?;
                continue;
            }

            let evaluation = evaluate(&left, &right, &selector);
            self.summary.evaluations += 1;
            if !evaluation.is_ok() {
                self.summary.errors += 1;
            }
            writeln!(self.writer, "{}", self.renderer.render(&evaluation))?;
        }

        tracing::debug!(summary = ?self.summary, "session ended");
        Ok(self.summary)
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Simple Terminal Calculator")?;
        writeln!(self.writer, "Operations: {}", symbol_list())?;
        writeln!(self.writer, "Type '{QUIT_COMMAND}' to exit")
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn symbol_list() -> String {
    Operation::all()
        .map(Operation::symbol)
        .collect::<Vec<_>>()
        .join(", ")
}
