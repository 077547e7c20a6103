//! End-to-end tests of the HTTP API
//!
//! The real router runs against a mocked PDF.co API. These tests verify:
//! 1. Tool descriptors and catalog responses
//! 2. Request validation (missing file, size limit, unknown tool)
//! 3. The success envelope of a full upload + process round
//! 4. Provider failures at either stage surface as `success: false`

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use pdfsir_domain::processing::ProcessingConfig;
use pdfsir_domain::{ProcessingService, ToolId};
use pdfsir_pdfco::{PdfCoClient, PdfCoConfig};
use pdfsir_web::{create_router, AppState};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const TEST_LIMIT: u64 = 64 * 1024;

fn test_app(provider: &MockServer, api_key: Option<&str>, max_upload_size: u64) -> TestServer {
    let mut config = PdfCoConfig::default().with_base_url(provider.uri());
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    let client = PdfCoClient::new(config).expect("Failed to create client");
    let service = ProcessingService::new(client, ProcessingConfig { max_upload_size });

    TestServer::new(create_router(AppState::new(service))).expect("Failed to start test server")
}

fn upload_form(name: &str, size: usize) -> MultipartForm {
    let part = Part::bytes(vec![b'%'; size]).file_name(name.to_string());
    MultipartForm::new().add_part("file", part)
}

async fn mock_upload_ok(provider: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/file/upload"))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "https://storage/x" })))
        .mount(provider)
        .await;
}

#[tokio::test]
async fn test_health() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_describe_known_tool() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/api/merge-pdf").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], "Merge PDF");
    assert_eq!(body["description"], "Combine multiple PDF files into one document");
    assert_eq!(body["acceptedFormats"], json!([".pdf"]));
    assert_eq!(body["category"], "edit");
}

#[tokio::test]
async fn test_describe_works_without_api_key() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, None, TEST_LIMIT);

    server.get("/api/images-to-pdf").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_describe_unknown_tools() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    for tool in ["unknown", "merge", "MERGE-PDF", "merge-pdf-2"] {
        let response = server.get(&format!("/api/{tool}")).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Tool not found" }));
    }
}

#[tokio::test]
async fn test_process_unknown_tool() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/staple-pdf")
        .multipart(upload_form("doc.pdf", 128))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": "Tool not found" }));
}

#[tokio::test]
async fn test_process_without_file() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/merge-pdf")
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "No file provided" }));
}

#[tokio::test]
async fn test_process_without_multipart_body() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.post("/api/merge-pdf").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid upload"));
}

#[tokio::test]
async fn test_oversized_file_is_rejected_for_any_tool() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let server = test_app(&provider, Some(API_KEY), 1024 * 1024);

    for tool in ["merge-pdf", "no-such-tool"] {
        let response = server
            .post(&format!("/api/{tool}"))
            .multipart(upload_form("big.pdf", 1024 * 1024 + 1))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "File size too large. Maximum size is 1MB.");
    }
}

#[tokio::test]
async fn test_merge_scenario() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/file/upload"))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "https://storage/x" })))
        .expect(1)
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/merge"))
        .and(header("x-api-key", API_KEY))
        .and(body_json(json!({ "url": "https://storage/x", "async": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://storage/merged.pdf",
            "remainingCredits": 97
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), ProcessingConfig::default().max_upload_size);

    let response = server
        .post("/api/merge-pdf")
        .multipart(upload_form("contract.pdf", 2_097_152))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "success": true,
            "resultUrl": "https://storage/merged.pdf",
            "message": "File processed successfully",
            "remainingCredits": 97,
            "originalSize": 2097152,
            "originalName": "contract.pdf"
        })
    );
}

#[tokio::test]
async fn test_every_tool_succeeds_against_provider() {
    let provider = MockServer::start().await;
    mock_upload_ok(&provider).await;

    Mock::given(method("POST"))
        .and(path_regex("^/v1/pdf/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "url": "https://storage/result" })),
        )
        .expect(ToolId::ALL.len() as u64)
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    for tool in ToolId::ALL {
        let response = server
            .post(&format!("/api/{tool}"))
            .multipart(upload_form("input.bin", 256))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true, "{tool}");
        assert_eq!(body["resultUrl"], "https://storage/result", "{tool}");
        assert!(body.get("remainingCredits").is_none());
    }
}

#[tokio::test]
async fn test_upload_failure_skips_processing() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/file/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "message": "Invalid file"
        })))
        .expect(1)
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/merge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "https://x" })))
        .expect(0)
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/merge-pdf")
        .multipart(upload_form("a.pdf", 512))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": "Invalid file" }));
}

#[tokio::test]
async fn test_upload_http_error_skips_processing() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/file/upload"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path_regex("^/v1/pdf/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/compress-pdf")
        .multipart(upload_form("a.pdf", 512))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Upload failed: Service Unavailable");
}

#[tokio::test]
async fn test_process_failure_returns_provider_message() {
    let provider = MockServer::start().await;
    mock_upload_ok(&provider).await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/security/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "message": "Invalid password"
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/unlock-pdf")
        .multipart(upload_form("locked.pdf", 1024))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": "Invalid password" }));
}

#[tokio::test]
async fn test_missing_api_key_fails_processing() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let server = test_app(&provider, None, TEST_LIMIT);

    let response = server
        .post("/api/merge-pdf")
        .multipart(upload_form("a.pdf", 16))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "error": "PDF.co API key not configured" })
    );
}

#[tokio::test]
async fn test_split_reports_every_result() {
    let provider = MockServer::start().await;
    mock_upload_ok(&provider).await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/split"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urls": ["https://storage/p1.pdf", "https://storage/p2.pdf"],
            "remainingCredits": 12
        })))
        .mount(&provider)
        .await;

    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .post("/api/split-pdf")
        .multipart(upload_form("book.pdf", 2048))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["resultUrl"], "https://storage/p1.pdf");
    assert_eq!(
        body["resultUrls"],
        json!(["https://storage/p1.pdf", "https://storage/p2.pdf"])
    );
    assert_eq!(body["remainingCredits"], 12);
}

#[tokio::test]
async fn test_catalog_lists_all_tools() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/tools").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total"], 26);
    assert_eq!(body["tools"][0]["id"], "convert-to-pdf");
}

#[tokio::test]
async fn test_catalog_filter_and_search() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server
        .get("/tools")
        .add_query_param("category", "security")
        .add_query_param("q", "password")
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let ids: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["protect-pdf", "unlock-pdf"]);
}

#[tokio::test]
async fn test_catalog_popular_group() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/tools").add_query_param("category", "popular").await;

    let body: Value = response.json();
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_catalog_unknown_category() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/tools").add_query_param("category", "fun").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Unknown category: fun" }));
}

#[tokio::test]
async fn test_openapi_document_lists_tool_routes() {
    let provider = MockServer::start().await;
    let server = test_app(&provider, Some(API_KEY), TEST_LIMIT);

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert!(body["paths"].get("/api/{tool_name}").is_some());
    assert!(body["paths"].get("/tools").is_some());
}
