//! Web server for the non-Polish text scanner

use anyhow::{Context, Result};
use clap::Parser;
use polscan_extract::{ScanConfig, Scanner};
use polscan_server::{router, AppState, ReportStore, DEFAULT_MAX_REPORTS};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "polscan-server")]
#[command(about = "Web interface for finding non-Polish text on a page")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Reports kept for download before the oldest is dropped
    #[arg(long, default_value_t = DEFAULT_MAX_REPORTS)]
    max_reports: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ScanConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ScanConfig::default(),
    }
    .with_env_overrides();
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }

    let scanner = Scanner::http(&config)?;
    let state = AppState::new(scanner, ReportStore::new(args.max_reports))
        .with_filename(config.output_filename.clone());

    let app = router(state).layer(CorsLayer::permissive());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, timeout_secs = config.timeout_secs, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
