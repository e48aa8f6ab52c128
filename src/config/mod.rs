use crate::core::{AppError, Result};
use std::env;

pub mod renderer;
pub mod server;

pub use renderer::RendererConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    /// Level for this crate's logs when `RUST_LOG` is unset
    pub log_level: String,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        format!("docgen={},actix_web=info", self.log_level)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL")
                    .map(|level| level.trim().to_lowercase())
                    .unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            renderer: RendererConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "PORT must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.app.log_level.as_str()) {
            return Err(AppError::Configuration(format!(
                "LOG_LEVEL must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        self.renderer.validate()
    }
}

/// Read an optional variable and parse it, falling back to `default`
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
