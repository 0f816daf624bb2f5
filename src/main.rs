//! HTTP server for the hiring simulation.
//!
//! Environment:
//! - `HOST_IP`: interface to bind, all interfaces when unset
//! - `PORT`: port to bind, default 1960
//! - `HIRING_SIM_CONFIG`: model directory, default `./config/default`
//! - `RUST_LOG`: tracing filter, default `info`

use std::env;

use hiring_sim::api::{AppState, create_router};
use hiring_sim::config::ConfigLoader;
use tracing::info;

const DEFAULT_PORT: &str = "1960";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config_dir = env::var("HIRING_SIM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        model = %config.metadata().name,
        version = %config.metadata().version,
        "Loaded model"
    );

    let host = env::var("HOST_IP")
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "0.0.0.0".into());
    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Starting server");
    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
