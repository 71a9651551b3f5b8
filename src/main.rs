//! `romaji-scan` - report the first library track with romaji-annotated lyrics.

use anyhow::Context;
use romaji_scan::config::Config;
use romaji_scan::library::LibraryClient;
use romaji_scan::scanner::{ScanReport, Scanner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stdout, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> anyhow::Result<ScanReport> {
    let config = Config::load().context("Failed to load config")?;
    let client = LibraryClient::new(&config);
    tracing::info!("Scanning library at {}", client.base_url());

    let scanner = Scanner::new(client, &config);
    let report = scanner.scan().await.context("Library scan failed")?;
    Ok(report)
}

fn print_report(report: &ScanReport) {
    match &report.matched {
        Some(found) => {
            println!("\nFOUND ROMAJI LYRICS for {}!", found.path);
            println!("--- Snippet ---");
            println!("{}", found.snippet);
            println!("--- End Snippet ---");
        }
        None => {
            println!(
                "No romaji lyrics found in the first {} of {} tracks ({} with lyrics, {} skipped)",
                report.checked, report.total_tracks, report.with_lyrics, report.skipped
            );
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Every outcome exits 0; a failed scan is reported, not propagated.
    match run().await {
        Ok(report) => print_report(&report),
        Err(e) => println!("Error: {e:#}"),
    }
}
