//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering can be
//! exercised without calling [`std::env::set_var`].

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// Variables not in `vars` are reported as absent; the process
    /// environment is never consulted.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a boolean switch.
    ///
    /// Accepts `true/1/yes/on` and `false/0/no/off` (case-insensitive).
    /// Returns `None` when the variable is absent, `Some(Err(raw))` when it
    /// holds anything else.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let val = self.var(name).ok()?;
        Some(match val.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(val),
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_ignores_process_environment() {
        let env = Env::mock([("SIMPLECALC_FORMAT", "json")]);
        assert_eq!(env.var("SIMPLECALC_FORMAT").unwrap(), "json");
        assert!(env.var("CARGO_MANIFEST_DIR").is_err());
    }

    #[test]
    fn flag_accepts_common_spellings() {
        let env = Env::mock([("A", "Yes"), ("B", "off"), ("C", " 1 ")]);
        assert_eq!(env.flag("A"), Some(Ok(true)));
        assert_eq!(env.flag("B"), Some(Ok(false)));
        assert_eq!(env.flag("C"), Some(Ok(true)));
    }

    #[test]
    fn flag_reports_garbage_and_absence() {
        let env = Env::mock([("A", "maybe")]);
        assert_eq!(env.flag("A"), Some(Err("maybe".to_string())));
        assert_eq!(env.flag("MISSING"), None);
    }
}
