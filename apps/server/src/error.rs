//! Error types for the HTTP API.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (kedai-core)  ──► 400 Bad Request                     │
//! │  StoreError                    ──► 500 Internal Server Error           │
//! │                                                                         │
//! │  Every error becomes {"error": "<message>"} - nothing is swallowed     │
//! │  except in /test, which downgrades store errors to status strings.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use kedai_core::ValidationError;
use kedai_store::StoreError;

/// HTTP API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or constraint-violating input. Raised before any
    /// persistence attempt.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The document store could not complete an operation.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::Validation(ValidationError::Required {
            field: "phone".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failure_maps_to_server_error() {
        let err = ApiError::Store(StoreError::ConnectionFailed("down".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::Store(StoreError::QueryFailed("bad query".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
