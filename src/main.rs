//! Seawatch Dashboard Server
//!
//! Run with: cargo run --bin seawatch
//!
//! # Configuration
//!
//! Config file lookup: `SEAWATCH_CONFIG`, then `~/.config/seawatch/config.toml`,
//! `/etc/seawatch/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `SEAWATCH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SEAWATCH_API_PORT`: Port to listen on (default: 8090)
//! - `SEAWATCH_SEED`: Fixed generator seed (default: fresh values per render)
//! - `SEAWATCH_LOG_LEVEL`: Log level (default: info)
//! - `SEAWATCH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, wins over `SEAWATCH_LOG_LEVEL`

use seawatch::api::{serve, AppState};
use seawatch::config::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("seawatch={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config.logging);

    tracing::info!("Starting Seawatch dashboard v{}", env!("CARGO_PKG_VERSION"));

    match config.generator.seed {
        Some(seed) => tracing::info!("Generator seed fixed at {}", seed),
        None => tracing::info!("Generator seeded from entropy on every render"),
    }
    tracing::info!(
        "SST grid: {} x {}",
        config.generator.grid_lat_steps,
        config.generator.grid_lon_steps
    );
    tracing::info!("CSV export enabled: {}", config.api.enable_export);

    let state = AppState::new(config.api.clone(), config.generator.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    Ok(())
}
