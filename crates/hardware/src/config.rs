//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Structures:** Hierarchical config for general, CPU and loader behaviour.
//! 2. **Enums:** Flag update policy and malformed program line policy.
//! 3. **Loading:** JSON deserialization with per-field defaults.
//!
//! Configuration is supplied as JSON or use `Config::default()`. Every field is optional
//! in JSON; missing sections and fields take their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use crate::core::arch::flags::FlagPolicy;
pub use crate::sim::loader::MalformedLinePolicy;

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The JSON was malformed or had the wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure containing all emulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use ls8_core::config::{Config, FlagPolicy, MalformedLinePolicy};
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.cpu.flag_policy, FlagPolicy::Clear);
/// assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Skip);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use ls8_core::config::{Config, FlagPolicy, MalformedLinePolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 10000 },
///     "cpu": { "flag_policy": "Sticky" },
///     "loader": { "malformed_lines": "Reject" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(10_000));
/// assert_eq!(config.cpu.flag_policy, FlagPolicy::Sticky);
/// assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Reject);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// CPU behaviour
    pub cpu: CpuConfig,
    /// Program loader behaviour
    pub loader: LoaderConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the JSON is malformed or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`] if its
    /// contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction
    pub trace_instructions: bool,

    /// Stop with an error after this many instructions (unbounded when `None`)
    pub max_steps: Option<u64>,
}

/// CPU behaviour settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// How `CMP` treats flags from earlier comparisons
    pub flag_policy: FlagPolicy,
}

/// Program loader settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// What to do with lines that are not a binary byte literal
    pub malformed_lines: MalformedLinePolicy,
}
