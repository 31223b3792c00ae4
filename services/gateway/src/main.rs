use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gateway::{AppState, config::GatewayConfig, routes};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env()?;

    // Initialize logging
    let default_level = if config.debug { "debug" } else { "info" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting forum gateway");

    let addr = config.listen_addr();
    let state = AppState::from_config(config)?;

    info!("Forum gateway initialized successfully");

    // Start the web server
    let app = routes::app(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Forum gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
