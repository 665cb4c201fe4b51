use cafe_ordering::config::AppConfig;
use cafe_ordering::order::InMemoryOrderSubmitter;
use cafe_ordering::{build_state, logging, serve};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::init_logger(config.verbose, config.log_json);
    tracing::debug!(?config, "Starting café ordering service");

    // Initialize application state
    let store = config.menu_store().await?;
    let state = build_state(Arc::new(store), Arc::new(InMemoryOrderSubmitter::new()));

    // A failed first load is not fatal; the menu is fetched again on demand.
    if let Err(e) = state.catalog.load().await {
        tracing::warn!(error = %e, "Initial menu load failed");
    }

    serve(state, config.bind).await?;
    Ok(())
}
