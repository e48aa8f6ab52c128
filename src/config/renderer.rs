use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::parse_var;
use crate::core::{AppError, Result};

/// Settings for the HTML → PDF renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Headless Chromium/Chrome/Brave executable
    pub browser_path: String,
    /// Replaces the embedded HTML template when set
    pub template_path: Option<PathBuf>,
    /// Default signature image, read once at start-up
    pub signature_path: PathBuf,
    pub timeout_secs: u64,
    pub max_concurrent_renders: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            browser_path: "chromium".to_string(),
            template_path: None,
            signature_path: PathBuf::from("media/sig.png"),
            timeout_secs: 60,
            max_concurrent_renders: 2,
        }
    }
}

impl RendererConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            browser_path: env::var("BROWSER_PATH").unwrap_or(defaults.browser_path),
            template_path: env::var("TEMPLATE_PATH").ok().map(PathBuf::from),
            signature_path: env::var("SIGNATURE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.signature_path),
            timeout_secs: parse_var("RENDER_TIMEOUT_SECS", defaults.timeout_secs)?,
            max_concurrent_renders: parse_var(
                "MAX_CONCURRENT_RENDERS",
                defaults.max_concurrent_renders,
            )?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.browser_path.trim().is_empty() {
            return Err(AppError::Configuration("BROWSER_PATH must not be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Render timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_concurrent_renders == 0 {
            return Err(AppError::Configuration(
                "At least one concurrent render must be allowed".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
