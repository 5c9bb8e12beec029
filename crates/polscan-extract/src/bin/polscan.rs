//! CLI for finding non-Polish text on a web page
//!
//! Usage:
//!   polscan https://www.apple.com/pl --output report.html

use anyhow::{bail, Context, Result};
use clap::Parser;
use polscan_extract::{ScanConfig, Scanner, REPORT_FILENAME};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polscan")]
#[command(about = "Extract non-Polish text snippets from a web page")]
struct Args {
    /// Page to analyze; prompted for when omitted
    url: Option<String>,

    /// Where to write the HTML report
    #[arg(short, long, default_value = REPORT_FILENAME)]
    output: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("Web Page Non-Polish Text Extractor");
    println!("{}", "=".repeat(40));

    let url = match args.url {
        Some(url) => url,
        None => prompt_url()?,
    };
    if url.trim().is_empty() {
        bail!("No URL provided");
    }

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
    println!("Analyzing: {}", url.trim());
    let report = scanner.scan(&url).await?;

    std::fs::write(&args.output, report.to_html())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!();
    println!("Text elements found:   {}", report.total_snippets);
    println!("Polish (filtered):     {}", report.polish_filtered);
    println!("Unclassified:          {}", report.unclassified);
    println!("Non-Polish snippets:   {}", report.len());
    println!();
    println!("Results saved to: {}", args.output.display());

    Ok(())
}

fn prompt_url() -> Result<String> {
    print!("Enter the URL to analyze: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
