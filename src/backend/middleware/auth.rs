/**
 * Authentication Middleware
 *
 * Middleware protecting routes that require a signed-in user. It extracts
 * the bearer token from the Authorization header, verifies it against the
 * process-wide session keys, and attaches the caller's identity to the
 * request extensions.
 *
 * Verification is stateless: no store is touched on the auth path, and a
 * rejected request never reaches its handler.
 *
 * # Error Mapping
 *
 * - Missing or malformed `Authorization` header -> 401 `MissingToken`
 * - Signature mismatch or expired token -> 403 `InvalidToken`
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user identity extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions for handlers
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::MissingToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header not in Bearer format");
        ApiError::MissingToken
    })?;

    let claims = verify_token(&state.session_keys, token).map_err(|e| {
        tracing::warn!("Token rejected: {:?}", e);
        ApiError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user id in token claims: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}
