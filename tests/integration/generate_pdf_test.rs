// Integration tests for the render server over real HTTP
//
// Spins up the production routes and middleware on an actix-test server with
// a stand-in PDF engine.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use std::sync::Arc;

#[actix_web::test]
async fn test_health_is_empty_ok() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));
    let client = TestClient::for_server(&srv);

    let mut response = client.get("/health").send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.body().await.unwrap();
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_ready_reflects_backend() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));
    let mut response = srv.get("/ready").send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ready"], true);

    let srv = spawn_test_server(Arc::new(BrokenEngine));
    let response = srv.get("/ready").send().await.unwrap();
    assert_eq!(response.status(), 503);
}

#[actix_web::test]
async fn test_generate_pdf_renders_document() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));

    let mut response = srv
        .post("/generate-pdf")
        .send_json(&quotation_payload())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/pdf");
    assert!(response.headers().contains_key("x-request-id"));

    let html = echoed_html(&response.body().await.unwrap());
    assert!(html.starts_with("%PDF"));
    assert!(html.contains("QUOTATION"));
    assert!(html.contains("Dr. Amar Sharma"));
    assert!(html.contains("Defibrillator (Biphasic)"));
    assert!(html.contains("162400.00"));
    assert!(html.contains("Subject to Patna Jurisdiction"));
}

#[actix_web::test]
async fn test_missing_signature_gets_default() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));

    let mut payload = quotation_payload();
    payload["signatureUrl"] = serde_json::json!("");

    let mut response = srv.post("/generate-pdf").send_json(&payload).await.unwrap();
    assert_eq!(response.status(), 200);

    let html = echoed_html(&response.body().await.unwrap());
    assert!(html.contains("U0lHTkFUVVJF"));
}

#[actix_web::test]
async fn test_hidden_columns_are_omitted() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));

    let mut payload = quotation_payload();
    payload["showPrice"] = serde_json::json!(false);

    let mut response = srv.post("/generate-pdf").send_json(&payload).await.unwrap();
    let html = echoed_html(&response.body().await.unwrap());
    assert!(!html.contains(">Price</th>"));
    assert!(html.contains(">Amount</th>"));
}

#[actix_web::test]
async fn test_render_failure_is_opaque() {
    let srv = spawn_test_server(Arc::new(BrokenEngine));

    let mut response = srv
        .post("/generate-pdf")
        .send_json(&quotation_payload())
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = response.body().await.unwrap();
    assert_eq!(body.as_ref(), b"Error generating PDF");
}

#[actix_web::test]
async fn test_unknown_doc_type_is_bad_request() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));

    let mut payload = quotation_payload();
    payload["docType"] = serde_json::json!("RECEIPT");

    let mut response = srv.post("/generate-pdf").send_json(&payload).await.unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_large_signature_is_accepted() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));

    // Inline signatures routinely exceed the default JSON limit
    let mut payload = quotation_payload();
    payload["signatureUrl"] = serde_json::json!(format!("data:image/png;base64,{}", "A".repeat(512 * 1024)));

    let client = TestClient::for_server(&srv);
    let response = client.post("/generate-pdf").send_json(&payload).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let srv = spawn_test_server(Arc::new(HtmlEchoEngine));
    let client = TestClient::for_server(&srv);

    let response = client
        .get("/health")
        .insert_header(("X-Request-ID", "quote-31-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "quote-31-01");
}
