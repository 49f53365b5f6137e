//! Service configuration: optional TOML file, then environment overrides.
//!
//! Environment variables (a `.env` file is honored):
//! - `SANKHYA_BIND`: listen address
//! - `OPENROUTER_API_KEY`: reading provider key
//! - `OPENROUTER_BASE_URL`: OpenAI-compatible API root
//! - `OPENROUTER_MODEL`: model identifier
//! - `SANKHYA_REFERER`, `SANKHYA_TITLE`: attribution headers

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// LLM reading settings.
    #[serde(default)]
    pub reading: ReadingConfig,
}

/// Settings for the LLM reading collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadingConfig {
    /// Bearer key. Readings are refused while unset.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}
fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}
fn default_model() -> String {
    "meta-llama/llama-3.1-405b-instruct".to_string()
}
fn default_referer() -> String {
    "http://localhost:5000".to_string()
}
fn default_title() -> String {
    "Vedic Numerology Calculator".to_string()
}
fn default_max_tokens() -> u32 {
    2000
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    60
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            reading: ReadingConfig::default(),
        }
    }
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            referer: default_referer(),
            title: default_title(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional TOML file, then apply process environment
    /// overrides (after reading `.env` if present).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let text = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.display().to_string(),
                    source,
                })?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };

        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env");
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override settings from `lookup` (normally the process environment).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("SANKHYA_BIND") {
            self.bind = bind.parse().map_err(|e| ConfigError::Invalid {
                key: "SANKHYA_BIND",
                message: format!("{bind:?}: {e}"),
            })?;
        }
        if let Some(key) = lookup("OPENROUTER_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.reading.api_key = Some(key);
        }
        if let Some(url) = lookup("OPENROUTER_BASE_URL") {
            self.reading.base_url = url;
        }
        if let Some(model) = lookup("OPENROUTER_MODEL") {
            self.reading.model = model;
        }
        if let Some(referer) = lookup("SANKHYA_REFERER") {
            self.reading.referer = referer;
        }
        if let Some(title) = lookup("SANKHYA_TITLE") {
            self.reading.title = title;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reading.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "reading.base_url",
                message: "must not be empty".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.reading.temperature) {
            return Err(ConfigError::Invalid {
                key: "reading.temperature",
                message: format!("{} outside 0.0..=2.0", self.reading.temperature),
            });
        }
        if self.reading.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "reading.timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
