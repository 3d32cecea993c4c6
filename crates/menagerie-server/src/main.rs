//! Binary entrypoint for the menagerie HTTP server.
//!
//! Reads configuration from environment variables:
//! - `MENAGERIE_BIND_ADDR`: socket address to listen on (default: "0.0.0.0:8080")

use menagerie_server::config::ServerConfig;
use menagerie_server::router::build_router;
use menagerie_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::seeded());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("menagerie server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
