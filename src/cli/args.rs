//! Clap argument types and config overrides.

use clap::Parser;

use simplecalc::config::Config;
use simplecalc::constants::MAX_PRECISION;
use simplecalc::output::OutputFormat;

/// Four-function calculator.
#[derive(Parser, Debug)]
#[command(
    name = "simplecalc",
    version = simplecalc::constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Output format (overrides config and SIMPLECALC_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Print results with exactly this many fractional digits (at most 20).
    #[arg(long, global = true, value_parser = parse_precision)]
    pub precision: Option<usize>,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Evaluate a single calculation, e.g. `simplecalc eval 6 x 7`.
    Eval(EvalArgs),

    /// Start an interactive calculator session.
    Repl,

    /// List supported operations and their symbols.
    Ops,

    /// Print version and build information.
    Version,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EvalArgs {
    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub left: String,

    /// Operation: name (add), symbol (+), or alias (plus).
    #[arg(allow_hyphen_values = true)]
    pub operation: String,

    /// Second operand.
    #[arg(allow_hyphen_values = true)]
    pub right: String,
}

/// Parse `--precision`, rejecting values above [`MAX_PRECISION`].
fn parse_precision(s: &str) -> Result<usize, String> {
    let p: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a non-negative integer"))?;
    if p > MAX_PRECISION {
        return Err(format!("must be at most {MAX_PRECISION}, got {p}"));
    }
    Ok(p)
}

impl Cli {
    /// Apply flags on top of the loaded config (flags have highest priority).
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = Some(precision);
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}
