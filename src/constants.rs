//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the fixed user-facing messages so a rename only requires changing
//! this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "simplecalc";

/// Crate version as reported by `--version` and `simplecalc version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, injected by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.simplecalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".simplecalc.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "simplecalc";

/// Largest accepted `precision` (fractional digits) from any config layer.
pub const MAX_PRECISION: usize = 20;

/// Label prefix shown in front of every rendered result.
pub const RESULT_PREFIX: &str = "Result: ";

// ── Calculation error messages ──────────────────────────────────────

pub const INPUT_ERROR: &str = "Error: Invalid input";
pub const OPERATION_ERROR: &str = "Error: Invalid operation";
pub const MATH_ERROR: &str = "Error: Division by zero";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "SIMPLECALC_FORMAT";
pub const ENV_PRECISION: &str = "SIMPLECALC_PRECISION";
pub const ENV_COLOR: &str = "SIMPLECALC_COLOR";
pub const ENV_LOG: &str = "SIMPLECALC_LOG";
