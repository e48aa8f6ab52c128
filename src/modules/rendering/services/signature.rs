use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// MIME type for a signature image, judged by extension
fn image_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Encode image bytes as a `data:` URI
pub fn to_data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read the default signature once at start-up.
///
/// A missing or unreadable file is not an error: documents then render
/// without a signature image.
pub fn load_default_signature(path: &Path) -> Option<String> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No default signature found, rendering without one");
        return None;
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            tracing::info!(path = %path.display(), bytes = bytes.len(), "Loaded default signature");
            Some(to_data_uri(&bytes, image_mime_type(path)))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read default signature");
            None
        }
    }
}
