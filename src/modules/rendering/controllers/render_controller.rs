use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::json_error_handler;
use crate::modules::documents::models::TemplateData;
use crate::modules::rendering::services::RenderService;

/// Request bodies may carry an inline signature image
pub const JSON_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Render a document to PDF
/// POST /generate-pdf
/// Responds with `application/pdf`, or an opaque 500 when rendering fails
pub async fn generate_pdf(
    service: web::Data<RenderService>,
    request: web::Json<TemplateData>,
) -> Result<HttpResponse, AppError> {
    let data = request.into_inner();
    let doc_type = data.doc_type;

    let pdf = service.render(data).await.map_err(|e| {
        tracing::error!(error = %e, doc_type = %doc_type, "PDF generation failed");
        e
    })?;

    tracing::info!(doc_type = %doc_type, bytes = pdf.len(), "PDF generated");

    Ok(HttpResponse::Ok().content_type("application/pdf").body(pdf))
}

/// Configure render routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(json_error_handler),
    )
    .route("/generate-pdf", web::post().to(generate_pdf));
}
