pub mod qualify;
pub mod resolve;

pub use qualify::api_qualify;
pub use resolve::api_resolve;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::error;

use leadsignal_common::LeadSignalError;

/// Wraps the shared error so it can carry the HTTP mapping:
/// 400 invalid input, 403 blocked (with reason code and the offending
/// domain or name), 500 configuration/upstream/unexpected.
pub struct ApiError(pub LeadSignalError);

impl From<LeadSignalError> for ApiError {
    fn from(e: LeadSignalError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            LeadSignalError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            LeadSignalError::Blocked(m) => (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "error": "blocked source",
                    "blocked_reason": m.reason.to_string(),
                    "matched": m.matched,
                })),
            )
                .into_response(),
            LeadSignalError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            LeadSignalError::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            LeadSignalError::Anyhow(e) => {
                error!(error = %e, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
