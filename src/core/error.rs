use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned to callers for every rendering failure
pub const RENDER_FAILURE_MESSAGE: &str = "Error generating PDF";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed requests (unknown document type, bad field name)
    #[error("Validation error: {0}")]
    Validation(String),

    /// PDF backend failed or produced no document
    #[error("Render error: {0}")]
    Render(String),

    /// HTML template could not be parsed or rendered
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Filesystem or process spawning errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering exceeded the configured deadline
    #[error("Render timed out after {0}s")]
    Timeout(u64),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Rendering failures are opaque to the caller; details stay in the logs
        if self.is_render_failure() {
            return HttpResponse::build(status_code)
                .content_type("text/plain; charset=utf-8")
                .body(RENDER_FAILURE_MESSAGE);
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        AppError::Render(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for every error raised while turning template data into a PDF
    pub fn is_render_failure(&self) -> bool {
        matches!(
            self,
            AppError::Render(_) | AppError::Template(_) | AppError::Io(_) | AppError::Timeout(_)
        )
    }
}
