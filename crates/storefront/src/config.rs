//! Storefront configuration loaded from environment variables.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use shopcart_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const OUTPUT_VAR: &str = "SHOPCART_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "SHOPCART_LOG_FORMAT";

/// How console responses are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per response.
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidOutput(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOPCART_OUTPUT: unknown output mode {0:?} (expected \"text\" or \"json\")")]
    InvalidOutput(String),

    #[error("SHOPCART_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

/// Storefront configuration.
///
/// Reads from environment variables:
/// - `SHOPCART_OUTPUT` — `text` (default) or `json`
/// - `SHOPCART_LOG_FORMAT` — `json` (default) or `pretty`
///
/// The log filter itself is read by the subscriber from `RUST_LOG`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub output: OutputMode,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let output: OutputMode = match lookup(OUTPUT_VAR) {
            Some(v) => v.parse()?,
            None => OutputMode::default(),
        };
        let log_format: LogFormat = match lookup(LOG_FORMAT_VAR) {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { output, log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.output, OutputMode::Text);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_reads_both_variables() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            (OUTPUT_VAR, "JSON"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_rejects_unknown_output() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[(OUTPUT_VAR, "yaml")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOutput("yaml".to_string()));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let err =
            StorefrontConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        match err {
            ConfigError::InvalidLogFormat(_) => {}
            _ => panic!("Expected InvalidLogFormat error"),
        }
    }
}
