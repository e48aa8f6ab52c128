// Transport module: carries document snapshots to the renderer and keeps the
// last rendered PDF for preview and download

pub mod services;

pub use services::{Download, PreviewSession, RenderClient, RenderTransport};
