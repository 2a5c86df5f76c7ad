//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vocab_core::EngineError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InsufficientWords { .. } => ApiError::BadRequest(err.to_string()),
            EngineError::SessionNotComplete
            | EngineError::SessionComplete
            | EngineError::InvalidAnswer => ApiError::Conflict(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = ApiError::NotFound("word 'xyzzy'".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_status() {
        let error = ApiError::Conflict("session is not complete".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_engine_state_errors_map_to_conflict() {
        let error = ApiError::from(EngineError::SessionNotComplete);
        assert!(matches!(error, ApiError::Conflict(_)));

        let error = ApiError::from(EngineError::InvalidAnswer);
        assert!(matches!(error, ApiError::Conflict(_)));
    }

    #[test]
    fn test_insufficient_words_maps_to_bad_request() {
        let error = ApiError::from(EngineError::InsufficientWords {
            requested: 4,
            available: 2,
        });
        assert!(matches!(error, ApiError::BadRequest(_)));
        assert_eq!(
            error.to_string(),
            "Bad request: not enough words: requested 4, 2 available"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ApiError::NotFound("word 'xyzzy'".to_string());
        assert_eq!(error.to_string(), "Not found: word 'xyzzy'");
    }
}
