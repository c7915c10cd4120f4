//! Decoder configuration
//!
//! Settings shared by the decoder front-ends: how decoded records are
//! rendered and how verbose logging is. Loaded from YAML; every key is
//! optional.
//!
//! ```yaml
//! output: json
//! log-level: debug
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// Rendering used for decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `MCC: 274, MNC: 001, LAC: 1, Cell-ID: 2`
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// YAML mapping
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

/// Decoder front-end configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DecoderConfig {
    /// Rendering used for decoded records
    pub output: OutputFormat,
    /// Minimum level of emitted log events
    pub log_level: LogLevel,
}

impl DecoderConfig {
    /// Parses a decoder configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use cellid_common::{DecoderConfig, OutputFormat};
    ///
    /// let config = DecoderConfig::from_yaml("output: yaml").unwrap();
    /// assert_eq!(config.output, OutputFormat::Yaml);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a decoder configuration from a YAML file.
    ///
    /// # Returns
    /// * `Ok(DecoderConfig)` - Successfully loaded configuration
    /// * `Err(Error)` - File I/O or YAML parsing error
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Returns a copy with the given overrides applied.
    ///
    /// Command-line values take precedence over file values.
    pub fn with_overrides(self, output: Option<OutputFormat>, log_level: Option<LogLevel>) -> Self {
        Self {
            output: output.unwrap_or(self.output),
            log_level: log_level.unwrap_or(self.log_level),
        }
    }
}
