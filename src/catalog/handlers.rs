//! REST API handlers for browsing the menu

use super::{
    filter::{filter_items, CategoryFilter},
    models::MenuItem,
};
use crate::error::Result;
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(list_menu))
        .route("/menu/reload", post(reload_menu))
}

/// Query parameters for GET /menu
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub category: CategoryFilter,

    #[serde(default)]
    pub search: String,
}

/// Endpoint: GET /menu
/// Returns the filtered menu, loading it first if needed.
async fn list_menu(
    State(state): State<SharedState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<MenuItem>>> {
    let catalog = state.catalog.snapshot().await?;
    Ok(Json(filter_items(&catalog, query.category, &query.search)))
}

/// Endpoint: POST /menu/reload
/// Re-fetches the menu from the store, replacing the current one.
async fn reload_menu(State(state): State<SharedState>) -> Result<Json<Vec<MenuItem>>> {
    let catalog = state.catalog.load().await?;
    Ok(Json(catalog.to_vec()))
}
