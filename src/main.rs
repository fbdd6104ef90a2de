use anyhow::{Context, Result};
use live_view_api::{AppState, create_router};
use live_view_common::ViewerConfig;
use live_view_store::ResultRepository;
use log::{info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from_env()?;
    let result_file = config.result_file();

    info!("Starting OCR live viewer...");
    info!("Serving results from {result_file:?}");
    if !result_file.exists() {
        warn!("{result_file:?} does not exist yet; the page will show a placeholder until it does.");
    }

    let repository = ResultRepository::new(result_file);
    let state = Arc::new(AppState::new(repository, config.result_label()));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("OCR live viewer stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
