//! # lyricfind
//!
//! Lyrics API server backed by `LyricFind`.

use anyhow::{Context, Result};
use clap::Parser;
use lyricfind_server::{server, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "lyricfind=info,lyricfind_client=info,lyricfind_server=info".into()
            }),
        )
        .init();

    let config = ServerConfig::parse();
    info!("Starting LyricFind server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config).context("Failed to create LyricFind client")?;
    match config.fixed_territory() {
        Some(territory) => info!("Serving every caller from territory {territory}"),
        None => info!("Resolving territory per caller"),
    }

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;
    info!("Listening on {}", listener.local_addr()?);

    server::serve(listener, state).await?;
    Ok(())
}
