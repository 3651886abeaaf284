//! The closed set of operations a selector can name.

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::ops::{self, MathError};

/// One of the four arithmetic operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in display order.
    pub fn all() -> impl Iterator<Item = Operation> {
        Operation::iter()
    }

    /// Canonical lowercase name (`"add"`, `"subtract"`, ...).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Single-character symbol used by the interactive prompt.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Additional selector spellings accepted besides the name and symbol.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Operation::Add => &["plus"],
            Operation::Subtract => &["sub", "minus"],
            Operation::Multiply => &["mul", "times", "x"],
            Operation::Divide => &["div"],
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, MathError> {
        match self {
            Operation::Add => Ok(ops::add(x, y)),
            Operation::Subtract => Ok(ops::subtract(x, y)),
            Operation::Multiply => Ok(ops::multiply(x, y)),
            Operation::Divide => ops::divide(x, y),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    /// Parse a selector: name, symbol, or alias, case-insensitive and
    /// ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Operation::all()
            .find(|op| {
                op.name() == wanted || op.symbol() == wanted || op.aliases().contains(&wanted.as_str())
            })
            .ok_or_else(|| format!("unknown operation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_symbols() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("SUBTRACT".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(" multiply ".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
    }

    #[test]
    fn every_alias_round_trips() {
        for op in Operation::all() {
            for alias in op.aliases() {
                assert_eq!(alias.parse::<Operation>(), Ok(op), "alias {alias}");
            }
            assert_eq!(op.symbol().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn reject_unknown_selectors() {
        for bad in ["modulo", "power", "%", "", "++", "addition"] {
            assert!(bad.parse::<Operation>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn all_lists_four_in_order() {
        let names: Vec<_> = Operation::all().map(Operation::name).collect();
        assert_eq!(names, vec!["add", "subtract", "multiply", "divide"]);
    }

    #[test]
    fn apply_dispatches_to_matching_function() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(10.0, 4.0), Ok(6.0));
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operation::Divide.apply(8.0, 2.0), Ok(4.0));
        assert_eq!(
            Operation::Divide.apply(5.0, 0.0),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
    }
}
