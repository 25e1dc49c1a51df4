//! Configuration management for snapthread
//!
//! Handles loading and validation of application configuration from TOML files.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Hub HTTP endpoint (Pinata-compatible REST API)
    pub http_endpoint: String,
    /// Optional bearer token sent with every hub request
    #[serde(default)]
    pub api_token: Option<String>,
    /// FID queried when no explicit FID is supplied
    #[serde(default)]
    pub default_fid: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionConfig {
    /// Per-cast reaction lookup timeout in seconds
    #[serde(default = "default_reaction_timeout")]
    pub timeout_secs: u64,
    /// Reaction lookups issued concurrently per batch
    #[serde(default = "default_reaction_batch_size")]
    pub batch_size: usize,
}

const fn default_reaction_timeout() -> u64 {
    5
}

const fn default_reaction_batch_size() -> usize {
    5
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_reaction_timeout(),
            batch_size: default_reaction_batch_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub hub: HubConfig,
    #[serde(default)]
    pub reactions: ReactionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - File I/O errors (file not found, permission denied, invalid path)
    /// - TOML parsing errors (invalid syntax, type mismatches, missing required fields)
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::SnapThreadError::Io)?;
        let config: Self = toml::from_str(&content).map_err(crate::SnapThreadError::TomlParsing)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    ///
    /// # Errors
    /// - No config file found (neither config.toml nor config.example.toml exists)
    /// - File I/O or TOML parsing errors
    pub fn load() -> crate::Result<Self> {
        // Try config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::SnapThreadError::ConfigError(
                "No config file found. Please create config.toml or config.example.toml"
                    .to_string(),
            ))
        }
    }

    fn validate(&self) -> crate::Result<()> {
        if self.hub.http_endpoint.is_empty() {
            return Err(crate::SnapThreadError::ConfigError(
                "hub.http_endpoint must not be empty".to_string(),
            ));
        }
        if self.reactions.batch_size == 0 {
            return Err(crate::SnapThreadError::ConfigError(
                "reactions.batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get hub HTTP endpoint
    #[must_use]
    pub fn hub_http_endpoint(&self) -> &str {
        &self.hub.http_endpoint
    }

    /// Per-cast reaction lookup timeout
    #[must_use]
    pub const fn reaction_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.reactions.timeout_secs)
    }

    /// Reaction lookups issued concurrently per batch
    #[must_use]
    pub const fn reaction_batch_size(&self) -> usize {
        self.reactions.batch_size
    }
}
