//! Order submission boundary
//!
//! Orders are stored by an external collaborator. The service only needs
//! [`OrderSubmitter::submit`]: hand over a draft, get back an order number
//! and the confirmed grand total, or a reason for the failure. Retrying is
//! left to the user.

use super::models::{OrderConfirmation, OrderDraft, PlacedOrder};
use crate::cart::models::checked_total;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("order service unavailable: {0}")]
    Unavailable(String),

    #[error("order rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderConfirmation, SubmissionError>;
}

/// Keeps accepted orders in memory
pub struct InMemoryOrderSubmitter {
    orders: DashMap<String, PlacedOrder>,
    accepting: AtomicBool,
}

impl Default for InMemoryOrderSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOrderSubmitter {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            accepting: AtomicBool::new(true),
        }
    }

    /// Opens or closes the kitchen; while closed every submission fails
    /// as unavailable.
    pub fn set_accepting(&self, accepting: bool) {
        self.accepting.store(accepting, Ordering::SeqCst);
    }

    pub fn find(&self, order_number: &str) -> Option<PlacedOrder> {
        self.orders.get(order_number).map(|o| o.value().clone())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn next_order_number() -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("ORD-{}", id[..8].to_uppercase())
    }
}

#[async_trait]
impl OrderSubmitter for InMemoryOrderSubmitter {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderConfirmation, SubmissionError> {
        if !self.accepting.load(Ordering::SeqCst) {
            return Err(SubmissionError::Unavailable("not accepting orders".into()));
        }
        if draft.lines.is_empty() {
            return Err(SubmissionError::Rejected("order has no items".into()));
        }

        let recomputed = checked_total(&draft.lines)
            .ok_or_else(|| SubmissionError::Rejected("items total is out of range".into()))?;
        if recomputed != draft.total {
            return Err(SubmissionError::Rejected(format!(
                "stated total {} does not match items total {}",
                draft.total, recomputed
            )));
        }

        let confirmation = OrderConfirmation {
            order_number: Self::next_order_number(),
            grand_total: recomputed,
        };
        self.orders.insert(
            confirmation.order_number.clone(),
            PlacedOrder {
                confirmation: confirmation.clone(),
                draft: draft.clone(),
            },
        );

        Ok(confirmation)
    }
}
