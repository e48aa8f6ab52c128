pub mod preview_session;
pub mod render_client;

pub use preview_session::{Download, PreviewSession};
pub use render_client::{RenderClient, RenderTransport, DEFAULT_API_URL};
