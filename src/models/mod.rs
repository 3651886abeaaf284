//! Shared types used across all modules.
//!
//! Operations, outcomes, and the evaluation record live here so the
//! dispatch routine, renderers, and the interactive session import from
//! one place rather than reaching into each other's internals.

pub mod evaluation;
pub mod operation;

pub use evaluation::{CalcError, Evaluation, Outcome};
pub use operation::Operation;
