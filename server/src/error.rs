//! Request-level errors and their JSON encoding.
//!
//! # Design
//! Every failure a handler can hit maps to one `ApiError` variant. The variant
//! decides the status code; `Display` is the `{"error": ...}` text. Nothing
//! here is fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use items_core::{ItemId, StoreError, ValidationFailure};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    #[error("Invalid item ID format")]
    MalformedIdentifier,

    #[error("Item {0} not found")]
    NotFound(ItemId),

    #[error("Invalid input: {0}")]
    ValidationFailed(#[from] ValidationFailure),

    /// The body could not be decoded as JSON or as a form.
    #[error("Invalid input: {0}")]
    BindingFailed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedIdentifier
            | ApiError::ValidationFailed(_)
            | ApiError::BindingFailed(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message shown inline on the HTML form, without the JSON prefix.
    pub fn detail(&self) -> String {
        match self {
            ApiError::ValidationFailed(failure) => failure.to_string(),
            ApiError::BindingFailed(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

/// Body of every JSON error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
