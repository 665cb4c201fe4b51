//! Order Module
//!
//! - Order models (OrderDraft, OrderConfirmation)
//! - The submission boundary and its in-memory adapter
//! - Checkout handler

pub mod handlers;
pub mod models;
pub mod submitter;

pub use handlers::{place_order, routes};
pub use models::{OrderConfirmation, OrderDraft};
pub use submitter::{InMemoryOrderSubmitter, OrderSubmitter, SubmissionError};
