//! Shopping Cart Domain Models
//!
//! This module contains the data structures exchanged by the cart
//! aggregator and its HTTP handlers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for an add-to-cart request
fn default_quantity() -> u32 {
    1
}

/// One aggregated entry in the cart, unique by `(menu_item_id, variant)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Menu item this line refers to
    pub menu_item_id: String,

    /// Item name captured when the line was created
    pub name: String,

    /// Variant (size) label
    pub variant: String,

    /// Number of units, always at least 1
    pub quantity: u32,

    /// Unit price captured when the line was created
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl CartLine {
    /// Returns true when this line has the given identity key
    pub fn is_keyed(&self, menu_item_id: &str, variant: &str) -> bool {
        self.menu_item_id == menu_item_id && self.variant == variant
    }

    /// quantity × unit price, `None` if it does not fit in a `Decimal`
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Exact sum of the line subtotals, `None` on overflow
pub fn checked_total(lines: &[CartLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.subtotal()?))
}

/// Input for adding an item to the cart
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSelection {
    pub menu_item_id: String,

    /// Variant (size) label, must be offered by the item
    pub variant: String,

    /// Units to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Unit price shown to the user; the catalog price is used when absent
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl LineSelection {
    pub fn new(menu_item_id: impl Into<String>, variant: impl Into<String>, quantity: u32) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            variant: variant.into(),
            quantity,
            price: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// Input for changing the quantity of an existing line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuantityInput {
    pub menu_item_id: String,
    pub variant: String,

    /// New quantity; 0 removes the line
    pub quantity: u32,
}

/// Identifies a single cart line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineKeyInput {
    pub menu_item_id: String,
    pub variant: String,
}

/// Cart contents together with derived totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u64,
}

// =============================================================================
// Cart Errors
// =============================================================================

/// Local validation failures; the cart is unchanged whenever one is returned
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Variant '{variant}' is not offered for item {menu_item_id}")]
    InvalidVariant {
        menu_item_id: String,
        variant: String,
    },

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Quantity limit exceeded for item {menu_item_id}")]
    QuantityOverflow { menu_item_id: String },

    #[error("Cart total too large after changing item {menu_item_id}")]
    TotalOverflow { menu_item_id: String },

    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("No cart line for item {menu_item_id} ({variant})")]
    LineNotFound {
        menu_item_id: String,
        variant: String,
    },

    #[error("Cart is empty")]
    EmptyCart,
}
