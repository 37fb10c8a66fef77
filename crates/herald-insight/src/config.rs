//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum document characters included in the prompt; longer documents
    /// are truncated, never chunked
    pub max_document_chars: usize,

    /// Maximum time for a single completion attempt (seconds)
    pub completion_timeout_secs: u64,

    /// Maximum attempts in the repair ladder: the initial call, one repair of
    /// its output, then one final retry of the original prompt
    pub max_attempts: u32,
}

impl AnalyzerConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_chars == 0 {
            return Err("max_document_chars must be greater than 0".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_document_chars: 6_000,
            completion_timeout_secs: 90,
            max_attempts: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Fast preset: smaller prompt, shorter timeout, no repair ladder
    pub fn fast() -> Self {
        Self {
            max_document_chars: 3_000,
            completion_timeout_secs: 45,
            max_attempts: 1,
        }
    }

    /// Thorough preset: larger prompt and longer timeout for big documents
    pub fn thorough() -> Self {
        Self {
            max_document_chars: 12_000,
            completion_timeout_secs: 180,
            max_attempts: 3,
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(AnalyzerConfig::fast().validate().is_ok());
        assert!(AnalyzerConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_invalid_max_document_chars() {
        let mut config = AnalyzerConfig::default();
        config.max_document_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_attempts() {
        let mut config = AnalyzerConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_document_chars, parsed.max_document_chars);
        assert_eq!(config.completion_timeout_secs, parsed.completion_timeout_secs);
        assert_eq!(config.max_attempts, parsed.max_attempts);
    }
}
