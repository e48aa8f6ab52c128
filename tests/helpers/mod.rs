// Shared test infrastructure for contract and integration tests
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// The PDF engines here stand in for the headless browser so the HTTP and
// preview flows can be exercised on machines without Chromium installed.

#![allow(dead_code)]

use actix_web::{web, App};
use async_trait::async_trait;
use docgen::core::{AppError, Result};
use docgen::middleware::{ErrorHandler, RequestId};
use docgen::modules::{health, rendering};
use docgen::rendering::{DocumentTemplate, PdfEngine, RenderService};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

pub use actix_test::TestServer;
use awc::Client;

/// Signature injected by the test render service
pub const TEST_SIGNATURE: &str = "data:image/png;base64,U0lHTkFUVVJF";

/// Returns the rendered HTML behind a PDF header, so tests can inspect what
/// the template produced
pub struct HtmlEchoEngine;

#[async_trait]
impl PdfEngine for HtmlEchoEngine {
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>> {
        Ok([b"%PDF-1.4 test\n".as_slice(), html.as_bytes()].concat())
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "html-echo"
    }
}

/// Always fails, like a browser that crashed mid-render
pub struct BrokenEngine;

#[async_trait]
impl PdfEngine for BrokenEngine {
    async fn html_to_pdf(&self, _html: &str) -> Result<Vec<u8>> {
        Err(AppError::render("browser exited with signal 11"))
    }

    async fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "broken"
    }
}

pub fn render_service(engine: Arc<dyn PdfEngine>) -> web::Data<RenderService> {
    let template = DocumentTemplate::embedded().expect("embedded template compiles");
    web::Data::new(RenderService::new(
        template,
        engine,
        Some(TEST_SIGNATURE.to_string()),
        2,
        Duration::from_secs(5),
    ))
}

/// Spawn a real HTTP server with the production routes and middleware
pub fn spawn_test_server(engine: Arc<dyn PdfEngine>) -> TestServer {
    let service = render_service(engine);

    actix_test::start(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .app_data(service.clone())
            .configure(health::configure)
            .configure(rendering::controllers::configure)
    })
}

/// HTTP client pointed at a running server, for requests built outside
/// `TestServer`'s own helpers
pub struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for an actix-test server
    pub fn for_server(srv: &TestServer) -> Self {
        Self::new(srv.url("/"))
    }

    pub fn get(&self, path: &str) -> awc::ClientRequest {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn post(&self, path: &str) -> awc::ClientRequest {
        self.client.post(format!("{}{}", self.base_url, path))
    }
}

/// Payload shaped like the editing surface sends it
pub fn quotation_payload() -> serde_json::Value {
    json!({
        "docType": "QUOTATION",
        "to": "Dr. Amar Sharma",
        "toAddress": "City Hospital & Research Centre\nPatna- 800001",
        "date": "31/01/26",
        "showQty": true,
        "showPrice": true,
        "showAmount": true,
        "items": [
            { "description": "ICU Bed (Single Handle Manual)", "qty": "4", "price": "15000", "amount": "60000" },
            { "description": "Defibrillator (Biphasic)", "qty": 1, "price": 85000, "amount": 85000 }
        ],
        "subtotal": "145000",
        "gstPercent": "12",
        "gst": "17400.00",
        "advancePayment": "",
        "paymentDone": "",
        "paymentRemaining": "",
        "finalAmount": "162400.00",
        "terms": ["Payment 100% advance against invoice", "Subject to Patna Jurisdiction"]
    })
}

/// The HTML carried inside an [`HtmlEchoEngine`] PDF
pub fn echoed_html(pdf: &[u8]) -> String {
    String::from_utf8_lossy(pdf).into_owned()
}
