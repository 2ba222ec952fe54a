/**
 * Signup Handler
 *
 * User registration for POST /api/v1/signup.
 *
 * # Registration Process
 *
 * 1. Validate username and password lengths
 * 2. Hash password with bcrypt (random per-record salt)
 * 3. Insert the user row; the unique constraint on username decides conflicts
 *
 * # Validation
 *
 * - Username must be at least 3 characters long
 * - Password must be at least 6 characters long
 *
 * Validation failure returns 400 with every violated field enumerated,
 * before any store access. A duplicate username also returns 400.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthCredentials, SignupResponse};
use crate::backend::auth::users::create_user;
use crate::backend::error::{ApiError, FieldViolation};

/// Minimum username length at signup
const MIN_USERNAME_LEN: usize = 3;
/// Minimum password length at signup
const MIN_PASSWORD_LEN: usize = 6;

/// Validate a signup request, collecting every violated field
pub(crate) fn validate_signup(request: &AuthCredentials) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if request.username.chars().count() < MIN_USERNAME_LEN {
        violations.push(FieldViolation::new(
            "username",
            format!("must be at least {} characters long", MIN_USERNAME_LEN),
        ));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(FieldViolation::new(
            "password",
            format!("must be at least {} characters long", MIN_PASSWORD_LEN),
        ));
    }

    violations
}

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or duplicate username
/// * `500 Internal Server Error` - hashing or database failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<AuthCredentials>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let violations = validate_signup(&request);
    if !violations.is_empty() {
        tracing::warn!("Signup validation failed for username: {}", request.username);
        return Err(ApiError::Validation(violations));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&pool, &request.username, &password_hash).await?;

    tracing::info!("User created: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}
