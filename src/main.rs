use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use pokedex_gateway::api::create_router_with_ui;
use pokedex_gateway::config::AppConfig;
use pokedex_gateway::infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init_logging(&config.logging);

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let state = pokedex_gateway::create_app_state_with_config(&config)?;
    let app = create_router_with_ui(state, &config.server.static_dir);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}
