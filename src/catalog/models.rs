//! Menu Catalog Models
//!
//! Data structures describing what the café sells. Items are loaded from a
//! [`MenuStore`](super::store::MenuStore) and are read-only afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Menu section an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Pizza,
    Burger,
    Fries,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pizza, Category::Burger, Category::Fries];

    /// Upper-case label used on the wire and for store ordering
    pub fn label(self) -> &'static str {
        match self {
            Category::Pizza => "PIZZA",
            Category::Burger => "BURGER",
            Category::Fries => "FRIES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A size option of a menu item with its own price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuVariant {
    /// Size label, e.g. "Regular" or "Large"
    pub size: String,

    /// Unit price of this size
    pub price: Decimal,
}

/// A purchasable product with one or more variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image reference, served by the store
    #[serde(default)]
    pub image_url: String,

    /// Ordered size/price options (never empty once loaded)
    pub variants: Vec<MenuVariant>,
}

impl MenuItem {
    /// Looks up a variant by its size label
    pub fn variant(&self, size: &str) -> Option<&MenuVariant> {
        self.variants.iter().find(|v| v.size == size)
    }

    /// Returns the reason this record cannot be offered, if any.
    pub fn defect(&self) -> Option<&'static str> {
        if self.variants.is_empty() {
            return Some("no variants");
        }
        if self.variants.iter().any(|v| v.price < Decimal::ZERO) {
            return Some("negative variant price");
        }
        None
    }
}
