//! Configuration management for StockMCP

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default outbound request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-like identification sent with every provider request. Yahoo
/// rejects requests without a recognizable User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration for StockMCP
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

/// Server-side settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Log level written to stderr (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Outbound quote-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Timeout applied to each endpoint attempt, in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent to the provider
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::config_locations() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get default configuration file locations, in priority order
    pub fn config_locations() -> Vec<PathBuf> {
        let mut locations = Vec::new();

        // 1. Current directory
        locations.push(PathBuf::from(".stockmcp.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("stockmcp").join("config.toml"));
        }

        // 3. Home directory
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(".stockmcp.toml"));
        }

        locations
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.server.log_level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "Invalid log_level '{}': must be one of {:?}",
                self.server.log_level, valid_log_levels
            )));
        }

        if self.provider.timeout_secs == 0 {
            return Err(Error::Config(
                "Invalid timeout_secs 0: must be at least 1".to_string(),
            ));
        }

        if self.provider.user_agent.trim().is_empty() {
            return Err(Error::Config(
                "Invalid user_agent: must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
