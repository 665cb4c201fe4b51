//! Checkout handler
//!
//! Turns the user's cart into an [`OrderDraft`], submits it, and takes the
//! submitted lines out of the cart only once the order collaborator has
//! accepted it.

use super::models::{OrderConfirmation, OrderDraft};
use crate::cart::{helpers::format_item_summary, models::CartError};
use crate::error::Result;
use crate::session::AuthUser;
use crate::state::{AppState, SharedState};
use axum::{extract::State, routing::post, Json, Router};

/// Creates routes for order operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/checkout", post(checkout))
}

/// Endpoint: POST /checkout
async fn checkout(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
) -> Result<Json<OrderConfirmation>> {
    place_order(&state, &user).await.map(Json)
}

/// Submits the user's cart as an order.
///
/// An empty cart is rejected locally. When submission fails the cart is
/// kept so the user can try again; on success only the submitted lines
/// leave the cart.
pub async fn place_order(state: &AppState, user: &str) -> Result<OrderConfirmation> {
    let cart = state.cart_of(user);
    if cart.is_empty() {
        return Err(CartError::EmptyCart.into());
    }

    let draft = OrderDraft {
        customer: user.to_string(),
        total: cart.total(),
        lines: cart.lines().to_vec(),
    };

    let confirmation = state.orders.submit(&draft).await.map_err(|e| {
        tracing::warn!(%user, error = %e, "Order submission failed, cart kept");
        e
    })?;

    state.settle_order(user, &draft.lines);
    tracing::info!(
        %user,
        order = %confirmation.order_number,
        total = %confirmation.grand_total,
        "Order placed: {}",
        format_item_summary(&draft.lines)
    );

    Ok(confirmation)
}
