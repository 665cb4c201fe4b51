//! Menu store boundary
//!
//! The catalog is owned by an external data store. [`MenuStore`] is the only
//! contract the service relies on: list every item, ordered by category.
//! [`InMemoryMenuStore`] is the bundled adapter, seeded from a TOML menu.

use super::models::MenuItem;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Menu shipped with the binary, used when no menu file is configured
pub const DEFAULT_MENU: &str = include_str!("../../assets/menu.toml");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("menu store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed menu data: {0}")]
    Malformed(#[from] toml::de::Error),
}

/// Read access to the external menu store
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Returns all menu items, stably ordered by category.
    async fn list_items(&self) -> Result<Vec<MenuItem>, StoreError>;
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// Store backed by a fixed list of items held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuStore {
    items: Vec<MenuItem>,
}

impl InMemoryMenuStore {
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        // Same ordering as the hosted store: by category label, ascending.
        items.sort_by_key(|item| item.category.label());
        Self { items }
    }

    /// Parses a TOML menu (`[[items]]` with nested `[[items.variants]]`)
    pub fn from_toml_str(source: &str) -> Result<Self, StoreError> {
        let menu: MenuFile = toml::from_str(source)?;
        Ok(Self::new(menu.items))
    }

    /// Reads and parses a TOML menu file
    pub async fn from_file(path: &Path) -> Result<Self, StoreError> {
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&source)
    }

    /// Store seeded with the embedded default menu
    pub fn with_default_menu() -> Result<Self, StoreError> {
        Self::from_toml_str(DEFAULT_MENU)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.items.clone())
    }
}
