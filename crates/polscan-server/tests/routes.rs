//! Route tests driven through the router without binding a socket

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use polscan_detect::LanguageIdentifier;
use polscan_extract::{PageFetcher, ScanConfig, ScanError, Scanner};
use polscan_server::{router, AnalyzeResponse, AppState, ErrorResponse, HealthResponse, ReportStore};
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;

struct FixedPage(&'static str);

#[async_trait::async_trait]
impl PageFetcher for FixedPage {
    async fn fetch(&self, _url: &Url) -> polscan_extract::Result<String> {
        Ok(self.0.to_string())
    }
}

struct Refused;

#[async_trait::async_trait]
impl PageFetcher for Refused {
    async fn fetch(&self, _url: &Url) -> polscan_extract::Result<String> {
        Err(ScanError::ConnectionFailed("connection refused".to_string()))
    }
}

struct AlwaysEnglish;

impl LanguageIdentifier for AlwaysEnglish {
    fn identify(&self, _text: &str) -> polscan_detect::Result<String> {
        Ok("en".to_string())
    }
}

const PAGE: &str = "<html><body><h1>Welcome to the store</h1><p>Sprawdź nowości</p></body></html>";

fn app(fetcher: Arc<dyn PageFetcher>) -> Router {
    let scanner = Scanner::new(&ScanConfig::default(), fetcher, Arc::new(AlwaysEnglish));
    router(AppState::new(scanner, ReportStore::new(4)))
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_form() {
    let response = app(Arc::new(Refused)).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<form id=\"analyze\">"));
}

#[tokio::test]
async fn test_health() {
    let response = app(Arc::new(Refused)).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.reports, 0);
}

#[tokio::test]
async fn test_empty_url_rejected() {
    let response = app(Arc::new(Refused))
        .oneshot(analyze_request(r#"{"url": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(error.error, "Please enter a URL");
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    let response = app(Arc::new(Refused))
        .oneshot(analyze_request(r#"{"url": "http://"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreachable_site_is_bad_gateway() {
    let response = app(Arc::new(Refused))
        .oneshot(analyze_request(r#"{"url": "example.com"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(error.error.contains("Failed to connect"));
}

#[tokio::test]
async fn test_unknown_download_is_not_found() {
    let response = app(Arc::new(Refused))
        .oneshot(get("/download/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_then_download() {
    let app = app(Arc::new(FixedPage(PAGE)));

    let response = app
        .clone()
        .oneshot(analyze_request(r#"{"url": "example.com"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let analysis: AnalyzeResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(analysis.success);
    assert_eq!(analysis.message, "Analysis completed successfully!");
    assert_eq!(analysis.snippets, 1);
    assert!(analysis.download_url.starts_with("/download/"));

    let response = app.oneshot(get(&analysis.download_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"non_polish_text_results.html\""
    );

    let report = body_string(response).await;
    assert!(report.contains("Found 1 non-Polish text snippet(s)"));
    assert!(report.contains("Welcome to the store"));
    assert!(!report.contains("Sprawdź nowości"));
}
