//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;

use simplecalc::models::Operation;

/// Styled one-line description for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1msimplecalc\x1b[0m \x1b[2m· add, subtract, multiply and divide from the command line\x1b[0m";

/// Render the list of supported operations, one per line.
///
/// Each line shows the canonical name, its symbol, and any aliases.
pub fn operations_listing() -> String {
    let mut out = String::new();
    for op in Operation::all() {
        out.push_str(&format!(
            "  {:<9} {}",
            op.name().bold(),
            op.symbol().cyan(),
        ));
        if !op.aliases().is_empty() {
            out.push_str(&format!(
                "  {}",
                format!("aliases: {}", op.aliases().join(", ")).dimmed()
            ));
        }
        out.push('\n');
    }
    out
}
