//! Menu Catalog Module
//!
//! - Catalog models (MenuItem, MenuVariant, Category)
//! - The store boundary and its in-memory adapter
//! - Loading with latest-fetch-wins replacement
//! - Pure category/search filtering
//! - REST API handlers

pub mod filter;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod store;

pub use filter::{filter_items, CategoryFilter};
pub use handlers::routes;
pub use loader::{Catalog, CatalogLoader};
pub use models::{Category, MenuItem, MenuVariant};
pub use store::{InMemoryMenuStore, MenuStore, StoreError};
