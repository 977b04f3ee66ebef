use anyhow::Result;
use grid_map::{api, config, state::AppState, telemetry};
use config::Config;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    telemetry::init_tracing(Some(&cfg.logging));

    for (name, path) in [
        ("transpower_sites", &cfg.data.transpower_sites),
        ("transpower_lines", &cfg.data.transpower_lines),
        ("vector_sites", &cfg.data.vector_sites),
        ("vector_feeders", &cfg.data.vector_feeders),
    ] {
        if !path.is_file() {
            warn!(dataset = name, path = %path.display(), "dataset not found; /network_data will fail until it exists");
        }
    }

    let addr = cfg.server.socket_addr()?;
    if cfg.server.host == "0.0.0.0" {
        warn!("Server binding to 0.0.0.0 - service will be accessible from network");
    }

    let app = api::router(AppState::new(cfg));

    info!(%addr, "starting grid map server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
