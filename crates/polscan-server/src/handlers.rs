//! Route handlers

use crate::error::ApiError;
use crate::page::INDEX_HTML;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
    /// Number of non-Polish snippets in the report
    pub snippets: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reports: usize,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reports: state.reports.len().await,
    })
}

pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(ApiError::MissingUrl);
    }

    info!(url = %url, "analysis requested");
    let report = state.scanner.scan(url).await?;
    let snippets = report.len();
    let id = state.reports.insert(report.to_html()).await;

    Ok(Json(AnalyzeResponse {
        success: true,
        message: "Analysis completed successfully!".to_string(),
        download_url: format!("/download/{}", id),
        snippets,
    }))
}

pub async fn download_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.reports.get(&id).await {
        Some(html) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", state.filename),
                ),
            ],
            html,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
