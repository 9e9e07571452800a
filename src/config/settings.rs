//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{MomError, APP_NAME};

/// Environment variable holding the completion API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable holding the sender address
pub const EMAIL_ADDRESS_ENV: &str = "EMAIL_ADDRESS";
/// Environment variable holding the sender password or app token
pub const EMAIL_PASSWORD_ENV: &str = "EMAIL_PASSWORD";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Completion model settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Outbound mail settings
    #[serde(default)]
    pub email: EmailSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API base URL (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Sender address, also used as the SMTP username
    #[serde(default)]
    pub address: String,

    /// SMTP password or app token
    #[serde(default)]
    pub password: String,

    /// Outbound relay
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Submission port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

// Default value functions

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            address: String::new(),
            password: String::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
        }
    }
}

impl EmailSettings {
    /// Whether both sender credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.address.trim().is_empty() && !self.password.is_empty()
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Fill empty secrets from the process environment.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fill = |slot: &mut String, key: &str| {
            if slot.trim().is_empty() {
                if let Some(value) = lookup(key) {
                    if !value.trim().is_empty() {
                        *slot = value;
                    }
                }
            }
        };

        fill(&mut self.llm.api_key, API_KEY_ENV);
        fill(&mut self.email.address, EMAIL_ADDRESS_ENV);
        fill(&mut self.email.password, EMAIL_PASSWORD_ENV);
    }

    /// Fail fast when the completion API key is absent.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        let key = self.llm.api_key.trim();
        if key.is_empty() {
            return Err(MomError::Config(format!(
                "API key not found. Set llm.api_key in {} or {}.",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string()),
                API_KEY_ENV
            )));
        }
        Ok(key)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
