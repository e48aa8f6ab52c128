pub mod pdf_engine;
pub mod render_service;
pub mod signature;
pub mod template;

pub use pdf_engine::{ChromiumEngine, PdfEngine};
pub use render_service::RenderService;
pub use signature::load_default_signature;
pub use template::DocumentTemplate;
