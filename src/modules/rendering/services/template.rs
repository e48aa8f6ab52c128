use std::path::Path;

use tera::{Context, Tera};

use crate::core::Result;
use crate::modules::documents::models::TemplateData;

/// Name the template is registered under; the `.html` suffix turns on autoescaping
pub const TEMPLATE_NAME: &str = "document.html";

/// Template shipped with the binary
const EMBEDDED_TEMPLATE: &str = include_str!("../../../../templates/document.html.tera");

/// Compiled HTML layout for bills, quotations and challans
pub struct DocumentTemplate {
    tera: Tera,
}

impl DocumentTemplate {
    /// Compile the embedded template
    pub fn embedded() -> Result<Self> {
        Self::from_source(EMBEDDED_TEMPLATE)
    }

    /// Compile a template read from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Loaded document template override");
        Self::from_source(&source)
    }

    /// Embedded template unless an override path is configured
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }

    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render template data into a complete HTML page
    pub fn render_html(&self, data: &TemplateData) -> Result<String> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
