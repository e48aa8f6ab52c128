//! DocGen commercial document composer
//!
//! Composes bills, quotations and delivery challans from line items and
//! payment fields, keeps the derived totals consistent, and renders the
//! result to PDF through an HTML template and a headless browser.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::documents;
pub use modules::rendering;
pub use modules::transport;
