//! Order Models
//!
//! What the cart hands to the order collaborator, and what comes back.

use crate::cart::models::CartLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Finalized cart ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    /// User placing the order
    pub customer: String,
    pub lines: Vec<CartLine>,

    /// Σ quantity × unit price over `lines`
    pub total: Decimal,
}

/// Answer from a successful submission, shown on the confirmation view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub grand_total: Decimal,
}

/// An order accepted by the in-memory submitter
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub confirmation: OrderConfirmation,
    pub draft: OrderDraft,
}
