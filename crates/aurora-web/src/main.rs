//! Aurora web server
//!
//! Run with: cargo run -p aurora-web --bin aurora

use aurora_common::AuroraConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aurora=debug,info")),
        )
        .init();

    info!("Starting Aurora BioLab demo server...");

    let config = AuroraConfig::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = aurora_web::state::AppState::new(config)?;
    let app = aurora_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
