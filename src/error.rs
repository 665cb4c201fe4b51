//! Service-level errors
//!
//! Every failure is recoverable by the user retrying; none of them stop the
//! server. [`CafeError`] maps each one onto an HTTP status and a JSON body.

use crate::cart::models::CartError;
use crate::catalog::store::StoreError;
use crate::order::submitter::SubmissionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("Failed to load menu: {0}")]
    CatalogLoadFailed(#[source] StoreError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Order submission failed: {0}")]
    OrderSubmissionFailed(#[from] SubmissionError),

    #[error("Sign in required")]
    Unauthenticated,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CafeError>;

impl CafeError {
    pub fn status(&self) -> StatusCode {
        match self {
            CafeError::CatalogLoadFailed(_) | CafeError::OrderSubmissionFailed(_) => {
                StatusCode::BAD_GATEWAY
            }
            CafeError::Cart(CartError::LineNotFound { .. }) => StatusCode::NOT_FOUND,
            CafeError::Cart(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CafeError::Unauthenticated => StatusCode::UNAUTHORIZED,
            CafeError::Config { .. } | CafeError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
