use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::rendering::RenderService;

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub pdf_backend: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 with an empty body whenever the server can answer
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// GET /ready - Readiness probe
/// Returns 200 only if the PDF backend can be launched
pub async fn readiness_check(service: web::Data<RenderService>) -> impl Responder {
    let pdf_backend = service.backend_available().await;
    if !pdf_backend {
        tracing::error!("Readiness check failed: PDF backend unavailable");
    }

    let response = ReadinessResponse {
        ready: pdf_backend,
        checks: ReadinessChecks {
            pdf_backend,
            application: true,
        },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
