/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to one HTTP status code; the conversion to a JSON
 * response lives in `conversion.rs`.
 *
 * # Identity Hiding
 *
 * Two deliberate collapses:
 * - `InvalidCredentials` covers both "unknown username" and "wrong password"
 *   so signin cannot be used to enumerate usernames.
 * - `NotFound` covers both "does not exist" and "belongs to someone else"
 *   so deletion and share lookups cannot leak existence.
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// A single violated field in a validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the request field that failed validation
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error type for all API handlers
///
/// Variants carry only what the client may see; internal detail is logged
/// at the point of failure and never serialized into the response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation; lists every violated field
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    /// Unique-constraint conflict, e.g. duplicate username at signup
    #[error("{0}")]
    Conflict(String),

    /// Signin failed; covers unknown username and wrong password alike
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No token, or an Authorization header not of the form `Bearer <token>`
    #[error("missing or malformed authorization header")]
    MissingToken,

    /// Token signature mismatch or expiry passed
    #[error("invalid or expired token")]
    InvalidToken,

    /// Resource absent or not owned by the caller
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store or infrastructure failure; body stays opaque
    #[error("internal server error")]
    Internal(#[from] sqlx::Error),
}

impl ApiError {
    /// Build a validation error for a single violated field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(field, message)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        tracing::error!("bcrypt failure: {:?}", e);
        Self::Internal(sqlx::Error::Protocol("password hashing failed".into()))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("token encoding failure: {:?}", e);
        Self::Internal(sqlx::Error::Protocol("token encoding failed".into()))
    }
}
