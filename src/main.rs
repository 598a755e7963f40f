//! Moodlog API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from the first of `~/.config/moodlog/config.toml`,
//! `/etc/moodlog/config.toml`, `./config.toml`, then overridden by:
//! - `MOODLOG_DATA_FILE`: Path of the JSON mood document
//! - `MOODLOG_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MOODLOG_API_PORT`: Port to listen on (default: 8090)
//! - `MOODLOG_LOG_LEVEL`: Log level (default: info)
//! - `MOODLOG_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use moodlog::api::{serve, ApiConfig, AppState};
use moodlog::config::Config;
use moodlog::store::StoreHandle;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Moodlog API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Mood document: {}", config.store.data_file);

    let store = Arc::new(StoreHandle::new(&config.store.data_file));

    // Fail fast on an unreadable or corrupt document
    store
        .load()
        .await
        .with_context(|| format!("cannot read mood document at {}", config.store.data_file))?;

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(store, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Moodlog API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config, honoring RUST_LOG
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("moodlog={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
