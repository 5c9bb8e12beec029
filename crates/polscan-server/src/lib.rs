//! # Polscan Server
//!
//! Web front end for the non-Polish text scanner. Submit a URL, get back a
//! link to the rendered report.
//!
//! ```text
//! GET  /                 URL form
//! GET  /health           liveness and buffered report count
//! POST /analyze          {"url": "..."} -> {"success", "message", "download_url", "snippets"}
//! GET  /download/:id     report as an HTML attachment
//! ```

pub mod error;
pub mod handlers;
pub mod page;
pub mod store;

use axum::routing::{get, post};
use axum::Router;
use polscan_extract::{Scanner, REPORT_FILENAME};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{AnalyzeResponse, HealthResponse};
pub use store::{ReportStore, DEFAULT_MAX_REPORTS};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<Scanner>,
    pub reports: ReportStore,
    /// Filename offered for downloaded reports
    pub filename: String,
}

impl AppState {
    pub fn new(scanner: Scanner, reports: ReportStore) -> Self {
        Self {
            scanner: Arc::new(scanner),
            reports,
            filename: REPORT_FILENAME.to_string(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/analyze", post(handlers::analyze_handler))
        .route("/download/:id", get(handlers::download_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
