//! Configuration management for Wirebridge

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the remote driver endpoint
    pub remote_url: String,

    /// Per-request timeout in milliseconds
    pub request_timeout: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_url: "http://localhost:4444".to_string(),
            request_timeout: 30000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(url) = env::var("WIREBRIDGE_REMOTE_URL") {
            config.remote_url = url;
        }

        if let Ok(timeout) = env::var("WIREBRIDGE_TIMEOUT_MS") {
            config.request_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid WIREBRIDGE_TIMEOUT_MS"))?;
        }

        if let Ok(log_level) = env::var("WIREBRIDGE_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote_url, "http://localhost:4444");
        assert_eq!(config.request_timeout, 30000);
    }

    #[test]
    fn test_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            remote_url = "http://127.0.0.1:9515"
            request_timeout = 5000
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.remote_url, "http://127.0.0.1:9515");
        assert_eq!(config.request_timeout, 5000);
        assert_eq!(config.log_level, "debug");
    }
}
