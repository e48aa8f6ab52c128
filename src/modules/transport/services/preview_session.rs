use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::render_client::RenderTransport;
use crate::core::Result;
use crate::modules::documents::models::Document;

/// A rendered PDF ready to be written under a user-chosen name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Write the PDF into `dir`; path separators in the name are replaced
    pub async fn save_into(&self, dir: &Path) -> Result<PathBuf> {
        let safe_name = self.file_name.replace(['/', '\\'], "_");
        let path = dir.join(safe_name);
        tokio::fs::write(&path, &self.bytes).await?;

        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "PDF saved");
        Ok(path)
    }
}

/// Editing-side state: the document being composed and the last PDF rendered
/// from it.
///
/// Renders are serialized by `&mut self`; a failed render leaves the previous
/// preview in place.
pub struct PreviewSession {
    document: Document,
    transport: Arc<dyn RenderTransport>,
    default_signature: Option<String>,
    preview: Option<Vec<u8>>,
}

impl PreviewSession {
    pub fn new(document: Document, transport: Arc<dyn RenderTransport>) -> Self {
        Self {
            document,
            transport,
            default_signature: None,
            preview: None,
        }
    }

    /// Signature to embed when the document carries none
    pub fn with_default_signature(mut self, signature: Option<String>) -> Self {
        self.default_signature = signature;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Last successfully rendered PDF
    pub fn preview(&self) -> Option<&[u8]> {
        self.preview.as_deref()
    }

    /// Send the current snapshot to the renderer and keep the result as the preview
    pub async fn generate(&mut self) -> Result<&[u8]> {
        let snapshot = self.document.snapshot(self.default_signature.as_deref());

        match self.transport.generate(&snapshot).await {
            Ok(bytes) => {
                tracing::debug!(doc_type = %snapshot.doc_type, bytes = bytes.len(), "Preview updated");
                Ok(self.preview.insert(bytes).as_slice())
            }
            Err(e) => {
                tracing::error!(doc_type = %snapshot.doc_type, error = %e, "PDF generation failed");
                Err(e)
            }
        }
    }

    /// `<DOCTYPE>_<recipient or "document">` for the current document
    pub fn default_file_stem(&self) -> String {
        self.document.snapshot(None).default_file_stem()
    }

    /// Package the existing preview for saving, without re-rendering.
    ///
    /// `chosen` is the name the user typed; `None` means the prompt was
    /// cancelled. A blank name falls back to the default stem. Returns `None`
    /// when cancelled or when nothing has been rendered yet.
    pub fn download(&self, chosen: Option<&str>) -> Option<Download> {
        let bytes = self.preview.as_ref()?;
        let chosen = chosen?;

        let stem = match chosen.trim() {
            "" => self.default_file_stem(),
            name => name.to_string(),
        };

        Some(Download {
            file_name: format!("{}.pdf", stem),
            bytes: bytes.clone(),
        })
    }
}
