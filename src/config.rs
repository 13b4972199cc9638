//! Configuration management for Lingo Gate

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
    /// Upper bound on a single provider call; unbounded when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            timeout_secs: None,
        }
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_provider_url() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Config {
    /// Load configuration from lingo-gate.toml
    pub fn load() -> Result<Self> {
        Self::load_from("lingo-gate.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;

            return Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()));
        }

        // Fall back to environment variables only
        Self::from_env()
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration entirely from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig {
                host: std::env::var("LINGO_HOST").unwrap_or_else(|_| default_host()),
                port: parse_env("LINGO_PORT")?.unwrap_or_else(default_port),
            },
            translation: TranslationConfig {
                provider_url: std::env::var("TRANSLATION_PROVIDER_URL")
                    .unwrap_or_else(|_| default_provider_url()),
                timeout_secs: parse_env("TRANSLATION_TIMEOUT_SECS")?,
            },
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse an optional environment variable; set but unparsable is an error
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {}", name, value)),
        Err(_) => Ok(None),
    }
}
