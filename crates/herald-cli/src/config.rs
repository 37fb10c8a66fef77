//! Configuration management for the CLI.
//!
//! Two secrets live here: the completion API key and the automation webhook
//! URL. Both can come from the configuration file or from the environment
//! (`HERALD_API_KEY`, `HERALD_WEBHOOK_URL`); the environment wins. A missing
//! secret is a reported configuration error, never a panic.

use crate::error::{CliError, Result};
use herald_insight::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment override for the completion API key.
pub const API_KEY_ENV: &str = "HERALD_API_KEY";

/// Environment override for the automation webhook URL.
pub const WEBHOOK_URL_ENV: &str = "HERALD_WEBHOOK_URL";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Completion API settings
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Automation webhook settings
    #[serde(default)]
    pub automation: AutomationConfig,

    /// Analyzer tuning
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// Completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Bearer API key; `HERALD_API_KEY` overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Automation webhook settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Webhook URL; `HERALD_WEBHOOK_URL` overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Characters of extracted text shown in the preview
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".herald").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the completion API key from environment or file.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.completion
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "Completion API key not configured. Set {} or run 'herald config set completion.api_key <key>'",
                    API_KEY_ENV
                ))
            })
    }

    /// Resolve the automation webhook URL from environment or file.
    pub fn resolve_webhook_url(&self) -> Result<String> {
        if let Ok(url) = env::var(WEBHOOK_URL_ENV) {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.automation
            .webhook_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "Automation webhook URL not configured. Set {} or run 'herald config set automation.webhook_url <url>'",
                    WEBHOOK_URL_ENV
                ))
            })
    }

    /// Set a configuration value by dotted key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "completion.api_key" => self.completion.api_key = Some(value.to_string()),
            "completion.model" => self.completion.model = value.to_string(),
            "completion.endpoint" => self.completion.endpoint = value.to_string(),
            "automation.webhook_url" => self.automation.webhook_url = Some(value.to_string()),
            "settings.preview_chars" => {
                self.settings.preview_chars = value.parse().map_err(|_| {
                    CliError::InvalidInput(format!("'{}' is not a number", value))
                })?;
            }
            other => {
                return Err(CliError::InvalidInput(format!(
                    "Unknown configuration key '{}'",
                    other
                )));
            }
        }
        Ok(())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            preview_chars: 3_000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_preview_chars() -> usize {
    3_000
}

fn default_model() -> String {
    herald_llm::openrouter::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    herald_llm::openrouter::DEFAULT_ENDPOINT.to_string()
}

/// Mask a secret for display, keeping just enough to recognize it.
pub fn mask_secret(secret: &str) -> String {
    if secret.len() <= 8 {
        return "••••".to_string();
    }
    let head: String = secret.chars().take(4).collect();
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.preview_chars, 3_000);
        assert!(config.completion.api_key.is_none());
        assert!(config.automation.webhook_url.is_none());
        assert_eq!(config.completion.model, "openai/gpt-4o-mini");
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::default();
        // Only meaningful when the env override is absent
        if env::var(API_KEY_ENV).is_err() {
            let result = config.resolve_api_key();
            assert!(matches!(result, Err(CliError::Config(_))));
        }
    }

    #[test]
    fn test_resolve_api_key_from_file() {
        let mut config = Config::default();
        config.completion.api_key = Some("sk-or-abc123".to_string());
        if env::var(API_KEY_ENV).is_err() {
            assert_eq!(config.resolve_api_key().unwrap(), "sk-or-abc123");
        }
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config
            .set_value("automation.webhook_url", "https://n8n.example.com/hook")
            .unwrap();
        assert_eq!(
            config.automation.webhook_url.as_deref(),
            Some("https://n8n.example.com/hook")
        );

        config.set_value("settings.preview_chars", "500").unwrap();
        assert_eq!(config.settings.preview_chars, 500);

        assert!(config.set_value("settings.preview_chars", "lots").is_err());
        assert!(config.set_value("unknown.key", "x").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.completion.api_key = Some("sk-or-abc".to_string());
        config.automation.webhook_url = Some("https://hooks.example.com/x".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.completion.api_key.as_deref(), Some("sk-or-abc"));
        assert_eq!(
            parsed.automation.webhook_url.as_deref(),
            Some("https://hooks.example.com/x")
        );
        assert_eq!(parsed.analyzer.max_document_chars, 6_000);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("short"), "••••");
        assert_eq!(mask_secret("sk-or-v1-abcdef123456"), "sk-o…3456");
    }
}
