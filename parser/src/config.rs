//! Parser configuration.
//!
//! Holds the settings a parser fixes at construction: the flag terminator,
//! the failure-reporting discipline, and the help layout. The configuration
//! is YAML-serializable so a program can ship its help layout alongside its
//! other settings; it never supplies argument values.
//!
//! # Example YAML
//!
//! ```yaml
//! terminator: "--"
//! error_mode: accumulate
//! help:
//!   width: 100
//!   indent: 2
//!   line_after_wrap: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use clarg_help::HelpOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// How binding failures are reported.
///
/// # Examples
///
/// ```
/// use clarg::ErrorMode;
///
/// assert_eq!(ErrorMode::default(), ErrorMode::FailFast);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// The first failure is returned from the declaration call.
    #[default]
    FailFast,
    /// Failures are collected in [`Parser::errors`](crate::Parser::errors)
    /// and the chain continues; the failing call has no effect.
    Accumulate,
}

/// Construction-time settings for a [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```
/// use clarg::{ErrorMode, ParserConfig};
///
/// let config = ParserConfig::from_yaml_str("error_mode: accumulate\n").unwrap();
/// assert_eq!(config.error_mode, ErrorMode::Accumulate);
/// assert_eq!(config.terminator, "--");
/// assert_eq!(config.help.width, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Token after which every input is positional.
    pub terminator: String,
    /// Failure-reporting discipline.
    pub error_mode: ErrorMode,
    /// Help layout.
    pub help: HelpOptions,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            terminator: "--".to_string(),
            error_mode: ErrorMode::FailFast,
            help: HelpOptions::default(),
        }
    }
}

impl ParserConfig {
    /// Configuration that collects failures instead of returning them.
    pub fn accumulate() -> Self {
        Self {
            error_mode: ErrorMode::Accumulate,
            ..Self::default()
        }
    }

    /// Parses configuration from a YAML document; missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](crate::ConfigError::YamlError) if the document
    /// is malformed.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::ConfigError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::ConfigError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
