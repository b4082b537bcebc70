use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freetp_core::{
    load_config, validate_config, Fetcher, FileStore, HttpFetcher, Scanner, SqliteFileStore,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("FREETP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);
    info!(
        "Scanning ids [{}, {}) in chunks of {}",
        config.scan.start, config.scan.end, config.scan.chunk_size
    );

    // Create SQLite file store
    let store: Arc<dyn FileStore> = Arc::new(
        SqliteFileStore::new(&config.database.path).context("Failed to create file store")?,
    );
    info!("File store initialized");

    // Create HTTP fetcher against the configured endpoint
    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(config.fetcher.clone()));
    info!("Fetcher initialized for {}", config.fetcher.endpoint);

    // Run one scan pass
    let scanner = Scanner::new(
        config.scan.clone(),
        config.fetcher.endpoint.clone(),
        fetcher,
        Arc::clone(&store),
    );

    let summary = scanner.run().await.context("Scan aborted")?;

    info!(
        "Scan complete: {} ids scanned, {} records written, {} misses over {} chunks ({} rows in store)",
        summary.ids_scanned,
        summary.records_written,
        summary.misses,
        summary.chunks_completed,
        store.count().unwrap_or(0),
    );

    Ok(())
}
