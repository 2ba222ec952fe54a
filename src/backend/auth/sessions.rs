/**
 * Session Tokens
 *
 * Stateless signed session tokens. Issuance embeds the user ID and an
 * absolute expiry five hours out; verification is a pure function of the
 * process-wide key and the token, with no server-side session table.
 * Revocation before natural expiry is not supported.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime: 5 hours from issuance
pub const TOKEN_TTL_SECS: u64 = 5 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys, built once from `JWT_SECRET` at startup
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a session token for a user
///
/// # Arguments
/// * `keys` - process-wide session keys
/// * `user_id` - User ID (UUID)
///
/// # Returns
/// Signed token string, expiring `TOKEN_TTL_SECS` after issuance
pub fn create_token(
    keys: &SessionKeys,
    user_id: Uuid,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a session token
///
/// Fails on signature mismatch or passed expiry. Expiry is checked with
/// zero leeway: a token is rejected from the exact expiry instant on.
pub fn verify_token(
    keys: &SessionKeys,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    let token_data = decode::<Claims>(token, &keys.decoding, &validation)?;
    Ok(token_data.claims)
}

/// Extract the user ID from a token
pub fn user_id_from_token(keys: &SessionKeys, token: &str) -> Result<Uuid, String> {
    let claims =
        verify_token(keys, token).map_err(|e| format!("token verification failed: {}", e))?;
    Uuid::parse_str(&claims.sub).map_err(|e| format!("invalid user id in token: {}", e))
}
