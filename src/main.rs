use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use webex_bridge::{create_router, AppState, Config, Meetings, RestClient};

/// Webex meeting bridge for Mattermost
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(short, long, default_value = "config/webex-bridge")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} starting", cfg.service.name);
    if !cfg.webex.is_valid() {
        warn!("Webex site host is not configured; meeting starts will fail until it is set");
    }

    let platform = Arc::new(RestClient::new(
        &cfg.mattermost.base_url,
        &cfg.mattermost.token,
    )?);
    let webex = Arc::new(cfg.webex.clone());
    let meetings = Arc::new(Meetings::new(platform.clone(), webex.clone()));
    let state = AppState::new(platform, meetings, webex);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
