//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type for every endpoint. Its `IntoResponse`
//! impl writes the status code and a single plain-text sentence; there is no
//! JSON error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use menagerie_core::CoreError;

/// Request failures, each resolved entirely inside its handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Body was not JSON, or not the expected shape (400).
    #[error("Invalid JSON body")]
    InvalidJson,

    /// `type` was something other than `dog` or `cat` (400).
    #[error("Invalid animal type")]
    InvalidAnimalType,

    /// No record has the requested name (404).
    #[error("Animal not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::InvalidAnimalType => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownKind { .. } => ApiError::InvalidAnimalType,
        }
    }
}
