use serde::Deserialize;

use crate::application::LoggerConfig;
use crate::domain::{LogError, Result};

/// Demo server configuration, sourced from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LoggerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            log: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `LOG_LEVEL`, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| LogError::config(format!("invalid SERVER_PORT: {port}")))?;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log.min_level = level.parse()?;
        }

        Ok(config)
    }
}
