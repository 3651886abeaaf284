//! Output renderers: terminal label and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Evaluation;

/// Trait for rendering an evaluation to an output format.
pub trait OutputRenderer {
    /// Render one evaluation to a string (no trailing newline).
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Build the renderer for this format.
    pub fn renderer(self, precision: Option<usize>, color: bool) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(terminal::TerminalRenderer { precision, color }),
            OutputFormat::Json => Box::new(json::JsonRenderer { precision }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}
