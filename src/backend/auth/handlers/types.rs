/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup and signin handlers.
 */

use serde::{Deserialize, Serialize};

/// Credentials submitted to signup and signin
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthCredentials {
    /// User's chosen username
    #[serde(default)]
    pub username: String,
    /// User's password (hashed before storage, never persisted in clear)
    #[serde(default)]
    pub password: String,
}

/// Response for a successful signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Response for a successful signin
#[derive(Debug, Serialize, Deserialize)]
pub struct SigninResponse {
    pub message: String,
    /// Bearer token for subsequent protected requests (5 hour expiry)
    pub token: String,
}
