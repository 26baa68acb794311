//! Error types for the HTTP front end
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Api Error Enum ==
/// Errors a cache request can fail with.
///
/// The cache engine itself never fails; these only describe malformed
/// requests and absent keys.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Neither the `key` header nor the `key` query parameter was given
    #[error("missing key")]
    MissingKey,

    /// Key absent or expired
    #[error("not found")]
    NotFound,

    /// Request body could not be read
    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingKey | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::MissingKey.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidBody("truncated".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::MissingKey.to_string(), "missing key");
        assert_eq!(ApiError::NotFound.to_string(), "not found");
        assert_eq!(ApiError::InvalidBody("truncated".into()).to_string(), "truncated");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
