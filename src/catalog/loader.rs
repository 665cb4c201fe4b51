//! Catalog loading
//!
//! Fetches the menu from a [`MenuStore`] and keeps the latest snapshot.
//! Overlapping loads may finish in any order; each load takes a ticket
//! before fetching and only installs its result if no newer ticket has
//! been installed already.

use super::{models::MenuItem, store::MenuStore};
use crate::error::CafeError;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::RwLock;

/// Immutable, shareable view of the loaded menu
pub type Catalog = Arc<[MenuItem]>;

#[derive(Default)]
struct Snapshot {
    ticket: u64,
    items: Option<Catalog>,
}

pub struct CatalogLoader {
    store: Arc<dyn MenuStore>,
    tickets: AtomicU64,
    current: RwLock<Snapshot>,
}

impl CatalogLoader {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self {
            store,
            tickets: AtomicU64::new(0),
            current: RwLock::new(Snapshot::default()),
        }
    }

    /// Fetches the full menu and replaces the current snapshot.
    ///
    /// Returns the snapshot in place once this load has finished, which is
    /// a newer one if an overlapping load already won. On failure the
    /// previous snapshot is left untouched.
    pub async fn load(&self) -> Result<Catalog, CafeError> {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(ticket, "Fetching menu");

        let fetched = self.store.list_items().await.map_err(|e| {
            tracing::warn!(ticket, error = %e, "Menu fetch failed");
            CafeError::CatalogLoadFailed(e)
        })?;

        let items: Catalog = fetched
            .into_iter()
            .filter(|item| match item.defect() {
                Some(reason) => {
                    tracing::warn!(item_id = %item.id, reason, "Skipping menu item");
                    false
                }
                None => true,
            })
            .collect();

        let mut current = self.current.write().await;
        if ticket > current.ticket {
            tracing::info!(ticket, items = items.len(), "Menu loaded");
            current.ticket = ticket;
            current.items = Some(items.clone());
            Ok(items)
        } else {
            tracing::debug!(ticket, installed = current.ticket, "Discarding stale menu fetch");
            Ok(current.items.clone().unwrap_or(items))
        }
    }

    /// Returns the loaded menu, fetching it on first use.
    pub async fn snapshot(&self) -> Result<Catalog, CafeError> {
        if let Some(items) = self.current.read().await.items.clone() {
            return Ok(items);
        }
        self.load().await
    }

    /// Returns the loaded menu without triggering a fetch
    pub async fn cached(&self) -> Option<Catalog> {
        self.current.read().await.items.clone()
    }
}
