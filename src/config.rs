//! Server configuration
//!
//! Every option can be given as a command-line flag or through the
//! matching `CAFE_*` environment variable.

use crate::catalog::store::InMemoryMenuStore;
use crate::error::{CafeError, Result};
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "cafe_ordering", version, about = "Café menu, cart and ordering service")]
pub struct AppConfig {
    /// Address to listen on
    #[arg(long, env = "CAFE_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// TOML menu file; the bundled menu is used when omitted
    #[arg(long, env = "CAFE_MENU_FILE")]
    pub menu_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "CAFE_VERBOSE")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "CAFE_LOG_JSON")]
    pub log_json: bool,
}

impl AppConfig {
    /// Builds the menu store from the configured file or the bundled menu
    pub async fn menu_store(&self) -> Result<InMemoryMenuStore> {
        let store = match &self.menu_file {
            Some(path) => InMemoryMenuStore::from_file(path).await.map_err(|e| {
                CafeError::Config {
                    message: format!("menu file {}: {}", path.display(), e),
                }
            })?,
            None => InMemoryMenuStore::with_default_menu().map_err(|e| CafeError::Config {
                message: format!("bundled menu: {}", e),
            })?,
        };

        tracing::info!(items = store.len(), "Menu store ready");
        Ok(store)
    }
}
