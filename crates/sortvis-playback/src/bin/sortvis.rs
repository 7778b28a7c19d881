//! Sort Visualization Server
//!
//! Generate an array and serve the playback control surface.
//!
//! Usage: `sortvis [bars] [port]`

use sortvis_playback::{Algorithm, VisConfig, VisServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortvis=info,sortvis_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = VisConfig::from_env()?;

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    if let Some(bars) = args.get(1).and_then(|s| s.parse().ok()) {
        config.bars = bars;
    }
    if let Some(port) = args.get(2).and_then(|s| s.parse().ok()) {
        config.addr.set_port(port);
    }
    let config = config.clamped();

    tracing::info!(
        bars = config.bars,
        delay_ms = config.delay.as_millis() as u64,
        seed = ?config.seed,
        "starting sort visualizer"
    );
    tracing::info!(
        "algorithms: {}",
        Algorithm::ALL.map(|a| a.name()).join(", ")
    );

    let server = VisServer::new(config)?;
    server.serve().await?;

    Ok(())
}
