//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, inputs, responses, errors)
//! - Cart aggregation (merge, quantity changes, totals)
//! - Add-to-cart notifications
//! - REST API handlers

pub mod aggregate;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod observer;

// Re-export commonly used types for convenience
pub use aggregate::Cart;
pub use handlers::routes;
pub use models::{CartError, CartLine, CartView, LineSelection};
pub use observer::{CartNotice, CartObserver, LogObserver};
