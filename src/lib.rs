//! simplecalc — four-function calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod ops;
pub mod output;
pub mod session;

pub use calculator::{calculate, evaluate};
pub use models::{CalcError, Evaluation, Operation};
