//! Configuration for the command line front end
//!
//! The decoder itself is configuration free; these options only control how
//! results are presented.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Output format for decoded headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable field list
    #[default]
    Text,
    /// JSON array of results
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

/// Front end configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// How decoded headers are printed
    pub format: OutputFormat,
    /// Print the raw bitfields before each decoded header
    pub show_bits: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration against what this build supports
    pub fn validate(&self) -> ConfigResult<()> {
        if self.format == OutputFormat::Json && !cfg!(feature = "json") {
            return Err(ConfigError::JsonUnavailable);
        }
        Ok(())
    }

    /// Log level implied by the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_bits);
        assert!(!config.verbose);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::UnknownFormat("yaml".to_string()))
        );
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_json_requires_feature() {
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        if cfg!(feature = "json") {
            assert!(config.validate().is_ok());
        } else {
            assert_eq!(config.validate(), Err(ConfigError::JsonUnavailable));
        }
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let config = Config { verbose: true, ..Config::default() };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
