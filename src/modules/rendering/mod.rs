// Rendering module: template data → HTML → PDF, exposed over HTTP

pub mod controllers;
pub mod services;

pub use services::{ChromiumEngine, DocumentTemplate, PdfEngine, RenderService};
