use async_trait::async_trait;
use reqwest::Client;
use std::env;

use crate::core::error::{AppError, Result};
use crate::modules::documents::models::TemplateData;

/// Renderer address used when `DOCGEN_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Anything that can turn a document snapshot into PDF bytes
#[async_trait]
pub trait RenderTransport: Send + Sync {
    async fn generate(&self, data: &TemplateData) -> Result<Vec<u8>>;
}

/// HTTP client for the render server's `POST /generate-pdf`
pub struct RenderClient {
    client: Client,
    base_url: String,
}

impl RenderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Client pointed at `DOCGEN_API_URL`
    pub fn from_env() -> Self {
        Self::new(env::var("DOCGEN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the render server answers its liveness probe
    pub async fn health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(base_url = %self.base_url, error = %e, "Render server unreachable");
                false
            }
        }
    }
}

#[async_trait]
impl RenderTransport for RenderClient {
    async fn generate(&self, data: &TemplateData) -> Result<Vec<u8>> {
        let url = format!("{}/generate-pdf", self.base_url);

        let response = self.client.post(&url).json(data).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::render(format!(
                "render server returned {}: {}",
                status, error_body
            )));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
