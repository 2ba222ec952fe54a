/**
 * Signin Handler
 *
 * Credential verification for POST /api/v1/signin.
 *
 * # Security
 *
 * - Unknown username and wrong password both return the same 401, so the
 *   endpoint cannot be used to enumerate usernames
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthCredentials, SigninResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::{ApiError, FieldViolation};
use crate::backend::server::state::AppState;

/// Validate a signin request: both fields must be non-empty
pub(crate) fn validate_signin(request: &AuthCredentials) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if request.username.is_empty() {
        violations.push(FieldViolation::new("username", "is required"));
    }
    if request.password.is_empty() {
        violations.push(FieldViolation::new("password", "is required"));
    }

    violations
}

/// Signin handler
///
/// # Errors
///
/// * `400 Bad Request` - empty username or password
/// * `401 Unauthorized` - unknown username or wrong password (one error)
/// * `500 Internal Server Error` - database or token failure
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<AuthCredentials>,
) -> Result<Json<SigninResponse>, ApiError> {
    let violations = validate_signin(&request);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let user = get_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Signin failed: unknown username");
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Signin failed: wrong password for {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&state.session_keys, user.id)?;

    tracing::info!("User signed in: {} ({})", user.username, user.id);

    Ok(Json(SigninResponse {
        message: "Signin successful".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_enumerated() {
        let violations = validate_signin(&AuthCredentials {
            username: String::new(),
            password: String::new(),
        });
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_non_empty_fields_pass() {
        let violations = validate_signin(&AuthCredentials {
            username: "a".to_string(),
            password: "b".to_string(),
        });
        assert!(violations.is_empty());
    }
}
