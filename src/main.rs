use std::{env, net::SocketAddr};

use anyhow::Context;
use finiquito_engine::api::{AppState, create_router};
use finiquito_engine::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "./config/es".to_string());
    let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {config_dir}"))?;
    tracing::info!(
        calculator = %config.calculator().code,
        reference_date = %config.calculator().reference_date,
        "configuration loaded"
    );

    let addr: SocketAddr = listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
