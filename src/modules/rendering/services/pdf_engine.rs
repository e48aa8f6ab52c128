use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::{AppError, Result};

/// Backend turning a complete HTML page into PDF bytes
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Print `html` to an A4 PDF with backgrounds and no margins
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>>;

    /// Whether the backend can currently be launched
    async fn is_available(&self) -> bool;

    /// Engine name used in logs
    fn name(&self) -> &str;
}

/// Headless Chromium-family browser driven through its command line
pub struct ChromiumEngine {
    browser_path: String,
}

impl ChromiumEngine {
    pub fn new(browser_path: impl Into<String>) -> Self {
        Self {
            browser_path: browser_path.into(),
        }
    }

    fn print_command(&self, html_path: &Path, pdf_path: &Path) -> Command {
        let mut command = Command::new(&self.browser_path);
        command
            .arg("--headless=new")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--hide-scrollbars")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl PdfEngine for ChromiumEngine {
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>> {
        // Scratch directory lives until the browser has written the PDF
        let workdir = tempfile::tempdir()?;
        let html_path = workdir.path().join("document.html");
        let pdf_path = workdir.path().join("document.pdf");

        tokio::fs::write(&html_path, html).await?;

        let output = self.print_command(&html_path, &pdf_path).output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::render(format!(
                "{} exited with {}: {}",
                self.browser_path,
                output.status,
                stderr.trim()
            )));
        }

        let pdf = tokio::fs::read(&pdf_path).await.map_err(|e| {
            AppError::render(format!("browser produced no PDF: {}", e))
        })?;

        if !pdf.starts_with(b"%PDF") {
            return Err(AppError::render("browser output is not a PDF document"));
        }

        Ok(pdf)
    }

    async fn is_available(&self) -> bool {
        match Command::new(&self.browser_path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!(browser = %self.browser_path, error = %e, "PDF backend not reachable");
                false
            }
        }
    }

    fn name(&self) -> &str {
        "chromium"
    }
}
