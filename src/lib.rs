//! Café Ordering Library
//!
//! Menu browsing, cart aggregation and order submission for a café,
//! served as a JSON HTTP API.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod order;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod session;
pub mod state;

pub use error::{CafeError, Result};

use cart::LogObserver;
use catalog::{CatalogLoader, MenuStore};
use order::OrderSubmitter;
use state::{AppState, SharedState};
use std::{net::SocketAddr, sync::Arc};

/// Wires the default observer with the given store and order collaborator
pub fn build_state(store: Arc<dyn MenuStore>, orders: Arc<dyn OrderSubmitter>) -> SharedState {
    Arc::new(AppState::new(
        CatalogLoader::new(store),
        Arc::new(LogObserver),
        orders,
    ))
}

/// Binds `addr` and serves the API until the process stops
pub async fn serve(state: SharedState, addr: SocketAddr) -> Result<()> {
    let app = router::create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
