//! Authentication boundary
//!
//! Sign-in happens upstream. The gateway in front of this service forwards
//! the signed-in user's id in the [`USER_HEADER`] header; requests without
//! it are treated as signed out.

use crate::cart::helpers::format_item_summary;
use crate::error::CafeError;
use crate::state::SharedState;
use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
    routing::post,
    Router,
};

/// Header carrying the authenticated user id
pub const USER_HEADER: &str = "x-cafe-user";

/// The signed-in user making the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = CafeError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(|user| AuthUser(user.to_string()))
            .ok_or(CafeError::Unauthenticated)
    }
}

/// Creates routes for session operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/auth/sign_out", post(sign_out))
}

/// Endpoint: POST /auth/sign_out
/// Ends the session; the user's cart does not survive it.
async fn sign_out(State(state): State<SharedState>, AuthUser(user): AuthUser) -> StatusCode {
    match state.discard_cart(&user) {
        Some(cart) if !cart.is_empty() => {
            tracing::info!(%user, "Signed out, discarded cart: {}", format_item_summary(cart.lines()));
        }
        _ => tracing::info!(%user, "Signed out"),
    }
    StatusCode::NO_CONTENT
}
