use crate::core::{AppError, Result};
use std::env;

pub mod gateway;
pub mod server;

pub use gateway::{GatewayConfig, NetworkMode};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(AppError::configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format,
            },
            server: ServerConfig::from_env()?,
            gateway: GatewayConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        if self.app.env == "production" && self.gateway.mode.is_test_net() {
            tracing::warn!("Running in production with LazerPay test mode enabled");
        }

        self.gateway.validate()
    }
}
