use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use super::pdf_engine::{ChromiumEngine, PdfEngine};
use super::signature::load_default_signature;
use super::template::DocumentTemplate;
use crate::config::RendererConfig;
use crate::core::{AppError, Result};
use crate::modules::documents::models::TemplateData;

/// Renders template data to PDF: fills the default signature, applies the
/// HTML template and hands the page to the PDF engine.
///
/// Holds no per-request state; concurrent renders are bounded by a semaphore
/// and each one by a timeout.
pub struct RenderService {
    template: DocumentTemplate,
    engine: Arc<dyn PdfEngine>,
    default_signature: Option<String>,
    permits: Semaphore,
    timeout: Duration,
}

impl RenderService {
    pub fn new(
        template: DocumentTemplate,
        engine: Arc<dyn PdfEngine>,
        default_signature: Option<String>,
        max_concurrent_renders: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            template,
            engine,
            default_signature,
            permits: Semaphore::new(max_concurrent_renders.max(1)),
            timeout,
        }
    }

    /// Build the production service: Chromium engine, configured template and
    /// the signature resolved once from disk
    pub fn from_config(config: &RendererConfig) -> Result<Self> {
        let template = DocumentTemplate::load(config.template_path.as_deref())?;
        let engine: Arc<dyn PdfEngine> = Arc::new(ChromiumEngine::new(config.browser_path.clone()));
        let default_signature = load_default_signature(&config.signature_path);

        Ok(Self::new(
            template,
            engine,
            default_signature,
            config.max_concurrent_renders,
            config.timeout(),
        ))
    }

    pub fn default_signature(&self) -> Option<&str> {
        self.default_signature.as_deref()
    }

    /// Render one document; any failure is reported once, with no partial output
    pub async fn render(&self, mut data: TemplateData) -> Result<Vec<u8>> {
        if data.needs_signature() {
            data.signature_url = self.default_signature.clone();
        }

        let html = self.template.render_html(&data)?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| AppError::internal("render queue closed"))?;

        tracing::debug!(
            engine = self.engine.name(),
            doc_type = %data.doc_type,
            items = data.items.len(),
            "Rendering document"
        );

        match tokio::time::timeout(self.timeout, self.engine.html_to_pdf(&html)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(self.timeout.as_secs())),
        }
    }

    /// Whether the PDF engine can be launched
    pub async fn backend_available(&self) -> bool {
        self.engine.is_available().await
    }
}
