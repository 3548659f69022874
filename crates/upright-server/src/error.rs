//! API error types and HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use upright_core::OrientError;

/// Errors surfaced to API clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request input is missing or unreadable.
    #[error("{0}")]
    BadRequest(String),

    /// The model is not loaded or unavailable.
    #[error("model not ready: {0}")]
    ModelNotReady(String),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<OrientError> for ApiError {
    fn from(err: OrientError) -> Self {
        match err {
            OrientError::Decode(msg) => ApiError::BadRequest(msg),
            OrientError::ModelNotReady(msg) => ApiError::ModelNotReady(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelNotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orient_errors_map_to_client_or_server_status() {
        let api: ApiError = OrientError::Decode("bad bytes".to_string()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));

        let api: ApiError = OrientError::ModelNotReady("no file".to_string()).into();
        assert!(matches!(api, ApiError::ModelNotReady(_)));

        let api: ApiError = OrientError::Encode("jpeg".to_string()).into();
        assert!(matches!(api, ApiError::Internal(_)));

        let api: ApiError = OrientError::Inference(
            upright_core::InferenceError::InferenceFailed("backend".to_string()),
        )
        .into();
        assert!(matches!(api, ApiError::Internal(_)));
    }
}
