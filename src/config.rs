use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::env;
use tracing::warn;

// Import logging macros
use crate::{log_system_event, log_validation};

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

/// Remote quiz service endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

/// Logging system configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub console_enabled: bool,
    pub log_directory: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        log_system_event!(config, "Loading client configuration from environment variables");

        let config = Config {
            service: ServiceConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        };

        log_system_event!(config, "Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(anyhow!(
                "QUIZ_API_URL must start with 'http://' or 'https://', got '{}'",
                self.service.base_url
            ));
        }

        if !["trace", "debug", "info", "warn", "error"]
            .contains(&self.logging.level.to_lowercase().as_str())
        {
            warn!(
                "Invalid log level '{}', using 'info' as fallback",
                self.logging.level
            );
        }

        log_validation!(
            success,
            "configuration",
            "Configuration validation completed successfully"
        );
        Ok(())
    }
}

impl ServiceConfig {
    fn from_env() -> Result<Self> {
        // Backend base URL (Gin server). Can be overridden with QUIZ_API_URL.
        let base_url = env::var("QUIZ_API_URL")
            .unwrap_or_else(|_| "https://alright-bev-lumaai-69a46e17.koyeb.app".to_string());

        Ok(ServiceConfig { base_url })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self> {
        let level =
            env::var("RUST_LOG").unwrap_or_else(|_| "info,newsquiz_client=debug".to_string());

        let file_enabled = env::var("LOG_FILE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let console_enabled = env::var("LOG_CONSOLE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let log_directory = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        Ok(LoggingConfig {
            level,
            file_enabled,
            console_enabled,
            log_directory,
        })
    }
}
