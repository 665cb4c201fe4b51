//! REST API handlers for shopping cart operations
//!
//! Every endpoint acts on the signed-in user's own cart and answers with
//! the updated [`CartView`].

use super::models::{CartError, CartView, LineKeyInput, LineSelection, SetQuantityInput};
use super::observer::deliver;
use crate::error::Result;
use crate::session::AuthUser;
use crate::state::SharedState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cart", get(get_cart)).route(
        "/cart/items",
        post(add_item)
            .put(set_quantity)
            .delete(remove_item),
    )
}

/// Endpoint: GET /cart
async fn get_cart(State(state): State<SharedState>, AuthUser(user): AuthUser) -> Json<CartView> {
    Json(state.cart_of(&user).view())
}

/// Endpoint: POST /cart/items
/// Adds a selection, merging with an existing line for the same variant.
async fn add_item(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    Json(selection): Json<LineSelection>,
) -> Result<Json<CartView>> {
    let catalog = state.catalog.snapshot().await?;

    let (notice, view) = {
        let mut cart = state.carts.entry(user.clone()).or_default();
        let notice = cart.merge_line(&catalog, selection)?;
        (notice, cart.view())
    };
    // The cart entry is unlocked here, observers may read `state.carts`.
    deliver(state.observer.as_ref(), &notice);

    tracing::debug!(%user, items = view.item_count, total = %view.total, "Cart updated");
    Ok(Json(view))
}

/// Endpoint: PUT /cart/items
/// Sets the quantity of a line; 0 removes it.
async fn set_quantity(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    Json(input): Json<SetQuantityInput>,
) -> Result<Json<CartView>> {
    let mut cart = state.carts.get_mut(&user).ok_or_else(|| CartError::LineNotFound {
        menu_item_id: input.menu_item_id.clone(),
        variant: input.variant.clone(),
    })?;
    cart.set_quantity(&input.menu_item_id, &input.variant, input.quantity)?;

    Ok(Json(cart.view()))
}

/// Endpoint: DELETE /cart/items
async fn remove_item(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    Json(input): Json<LineKeyInput>,
) -> Result<Json<CartView>> {
    let mut cart = state.carts.get_mut(&user).ok_or_else(|| CartError::LineNotFound {
        menu_item_id: input.menu_item_id.clone(),
        variant: input.variant.clone(),
    })?;
    let removed = cart.remove_line(&input.menu_item_id, &input.variant)?;
    tracing::debug!(%user, item = %removed.name, variant = %removed.variant, "Line removed");

    Ok(Json(cart.view()))
}
