mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = GatewayConfig::from_env()?;

    // RUST_LOG wins over the configured default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        sweep_end = config.sweep.end,
        sweep_step = config.sweep.step,
        "Starting commission gateway"
    );

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
