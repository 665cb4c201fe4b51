//! Application State
//!
//! Holds the per-user carts together with the external collaborators the
//! handlers talk to: the catalog loader, the add-to-cart observer and the
//! order submitter.

use crate::cart::{aggregate::Cart, models::CartLine, observer::CartObserver};
use crate::catalog::loader::CatalogLoader;
use crate::order::submitter::OrderSubmitter;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// In-memory carts keyed by the signed-in user.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Cart>,

    pub catalog: CatalogLoader,
    pub observer: Arc<dyn CartObserver>,
    pub orders: Arc<dyn OrderSubmitter>,
}

impl AppState {
    pub fn new(
        catalog: CatalogLoader,
        observer: Arc<dyn CartObserver>,
        orders: Arc<dyn OrderSubmitter>,
    ) -> Self {
        Self {
            carts: DashMap::new(),
            catalog,
            observer,
            orders,
        }
    }

    /// Copy of the user's cart, empty if they have none yet
    pub fn cart_of(&self, user: &str) -> Cart {
        self.carts
            .get(user)
            .map(|cart| cart.value().clone())
            .unwrap_or_default()
    }

    /// Takes ordered lines out of the user's cart. Anything added while
    /// the order was in flight stays; an emptied cart is dropped.
    pub fn settle_order(&self, user: &str, ordered: &[CartLine]) {
        if let Some(mut cart) = self.carts.get_mut(user) {
            cart.deduct(ordered);
        }
        self.carts.remove_if(user, |_, cart| cart.is_empty());
    }

    /// Discards the user's cart, returning it if there was one
    pub fn discard_cart(&self, user: &str) -> Option<Cart> {
        self.carts.remove(user).map(|(_, cart)| cart)
    }
}
