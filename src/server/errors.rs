//! # Gateway Errors
//!
//! Error types for the request gateway. Every failure is converted to a
//! JSON response at this boundary; nothing propagates to a crash.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::{AuthError, BASIC_CHALLENGE};
use crate::store::StoreError;

/// Result type for gateway operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Request gateway errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Credential gate failure; the response carries the challenge header.
    #[error("Authentication required")]
    Auth(#[from] AuthError),

    /// Path id segment that is not an all-digits integer.
    #[error("Invalid transaction ID")]
    InvalidId,

    /// Valid id with no matching record.
    #[error("Transaction not found")]
    NotFound,

    /// Method/path combination outside the routing contract.
    #[error("Endpoint not found")]
    RouteNotFound,

    /// Empty body on a write operation.
    #[error("No data provided")]
    NoData,

    /// Body present but not a JSON object.
    #[error("Invalid JSON")]
    MalformedPayload,

    /// Internal failure (lock poisoning).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,

            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NoData => StatusCode::BAD_REQUEST,
            ApiError::MalformedPayload => StatusCode::BAD_REQUEST,

            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,

            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body: the `error` key is what distinguishes failures from
/// success payloads.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, BASIC_CHALLENGE)], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
