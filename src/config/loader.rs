//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.simplecalc.toml` in the working directory
//! 4. `~/.config/simplecalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{ENV_COLOR, ENV_FORMAT, ENV_PRECISION, MAX_PRECISION};
use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value in config file {path}: {message}")]
    InvalidValue { path: PathBuf, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// How results are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed number of fractional digits; `None` prints the shortest form.
    pub precision: Option<usize>,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            precision: None,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the local config in `dir`, then applies
    /// environment variable overrides. CLI flags are applied by the caller.
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate().map_err(|message| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Check values that parse but are out of range.
    fn validate(&self) -> Result<(), String> {
        match self.output.precision {
            Some(p) if p > MAX_PRECISION => Err(format!(
                "output.precision must be at most {MAX_PRECISION}, got {p}"
            )),
            _ => Ok(()),
        }
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_output = OutputConfig::default();
        if other.output.format != default_output.format {
            self.output.format = other.output.format;
        }
        if other.output.precision.is_some() {
            self.output.precision = other.output.precision;
        }
        // Disabled overrides enabled
        if !other.output.color {
            self.output.color = false;
        }
    }

    /// Apply environment variable overrides. Invalid values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => tracing::warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_PRECISION) {
            match val.trim().parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => self.output.precision = Some(p),
                _ => tracing::warn!(
                    "ignoring invalid {ENV_PRECISION} value: {val} (expected 0..={MAX_PRECISION})"
                ),
            }
        }
        match env.flag(ENV_COLOR) {
            Some(Ok(color)) => self.output.color = color,
            Some(Err(val)) => tracing::warn!("ignoring invalid {ENV_COLOR} value: {val}"),
            None => {}
        }
    }
}
